use super::state::{PAGE_SIZE_OPTIONS, ViewState};
use crate::domain::{Book, SortOrder};

pub const LOADING_MESSAGE: &str = "Loading books...";

const COLUMNS: [&str; 8] = [
    "Title",
    "Author",
    "Publisher",
    "ISBN",
    "Classification",
    "Category",
    "Pages",
    "Price",
];

/// 操作ボタンの有効・無効
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// 1ページ目では無効
    pub previous_enabled: bool,
    /// 最終ページでは無効
    pub next_enabled: bool,
}

impl Controls {
    pub fn for_state(state: &ViewState) -> Self {
        Self {
            previous_enabled: state.has_previous_page(),
            next_enabled: state.has_next_page(),
        }
    }
}

pub fn sort_button_label(order: SortOrder) -> String {
    let direction = match order {
        SortOrder::Asc => "Ascending",
        SortOrder::Desc => "Descending",
    };
    format!("Sort by Title ({direction})")
}

/// ビューを文字列として描画する
///
/// 読み込み中は読み込み表示のみ。それ以外はソートボタン、ページサイズ選択、
/// 書籍テーブル、前後ページ操作を描画する。
/// 有効なボタンは`[..]`、無効なボタンは`(..)`で表す。
pub fn render(state: &ViewState) -> String {
    if state.loading {
        return LOADING_MESSAGE.to_string();
    }

    let controls = Controls::for_state(state);
    let mut out = String::new();

    let sizes: Vec<String> = PAGE_SIZE_OPTIONS
        .iter()
        .map(|size| {
            if *size == state.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect();
    out.push_str(&format!(
        "[{}]    Results per page: {}\n\n",
        sort_button_label(state.sort_order),
        sizes.join(" ")
    ));

    out.push_str(&render_table(&state.books));

    out.push_str(&format!(
        "\n{}  Page {} of {}  {}\n",
        button("Previous", controls.previous_enabled),
        state.pagination.current_page,
        state.pagination.total_pages,
        button("Next", controls.next_enabled),
    ));

    out
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

fn book_row(book: &Book) -> [String; 8] {
    [
        book.title.clone(),
        book.author.clone(),
        book.publisher.clone(),
        book.isbn.clone(),
        book.classification.clone(),
        book.category.clone(),
        book.page_count.to_string(),
        book.formatted_price(),
    ]
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

fn render_table(books: &[Book]) -> String {
    let rows: Vec<[String; 8]> = books.iter().map(book_row).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(COLUMNS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("{}\n", rule.join("-+-")));
    for row in &rows {
        out.push_str(&format_line(row.iter().map(String::as_str), &widths));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::state::{ViewEvent, reduce};
    use crate::domain::{BookId, BookPage, PaginationInfo};

    fn book(id: i32, title: &str, price: f64) -> Book {
        Book {
            book_id: BookId::from_i32(id),
            title: title.to_string(),
            author: "Victor Hugo".to_string(),
            publisher: "Signet".to_string(),
            isbn: "978-0451419439".to_string(),
            classification: "Fiction".to_string(),
            category: "Classic".to_string(),
            page_count: 1488,
            price,
        }
    }

    fn loaded(current_page: i64, total_count: i64) -> ViewState {
        let (state, cmd) = reduce(ViewState::new(), ViewEvent::Mounted);
        let (state, _) = reduce(
            state,
            ViewEvent::FetchSucceeded {
                token: cmd.unwrap().token,
                page: BookPage {
                    data: vec![book(1, "Les Miserables", 9.95)],
                    pagination: PaginationInfo::new(current_page, 5, total_count),
                },
            },
        );
        state
    }

    #[test]
    fn test_render_loading() {
        assert_eq!(render(&ViewState::new()), "Loading books...");
    }

    #[test]
    fn test_render_table_and_controls() {
        let screen = render(&loaded(1, 12));

        assert!(screen.contains("[Sort by Title (Ascending)]"));
        assert!(screen.contains("Results per page: [5] 10 25 50"));
        assert!(screen.contains("Title"));
        assert!(screen.contains("Classification"));
        assert!(screen.contains("Les Miserables"));
        assert!(screen.contains("$9.95"));
        assert!(screen.contains("1488"));
        assert!(screen.contains("(Previous)  Page 1 of 3  [Next]"));
    }

    #[test]
    fn test_render_descending_label() {
        let (state, cmd) = reduce(loaded(1, 12), ViewEvent::ToggleSortOrder);
        let (state, _) = reduce(
            state,
            ViewEvent::FetchSucceeded {
                token: cmd.unwrap().token,
                page: BookPage {
                    data: vec![book(2, "Unbroken", 13.33)],
                    pagination: PaginationInfo::new(1, 5, 12),
                },
            },
        );

        assert!(render(&state).contains("[Sort by Title (Descending)]"));
    }

    #[test]
    fn test_controls_disabled_on_single_page() {
        let state = loaded(1, 3);
        let controls = Controls::for_state(&state);

        assert!(!controls.previous_enabled);
        assert!(!controls.next_enabled);
        assert!(render(&state).contains("(Previous)  Page 1 of 1  (Next)"));
    }

    #[test]
    fn test_render_keeps_selected_size_after_invalid_change() {
        let (state, cmd) = reduce(loaded(1, 12), ViewEvent::ChangePageSize(7));
        assert!(cmd.is_none());
        assert!(render(&state).contains("Results per page: [5] 10 25 50"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let screen = render(&loaded(1, 0));
        assert!(screen.contains("Page 1 of 0"));
        assert!(screen.contains("(Next)"));
    }
}
