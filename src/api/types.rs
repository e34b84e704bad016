use serde::{Deserialize, Serialize};

use crate::domain::{
    Book, BookId, BookPage, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PaginationInfo, SortOrder,
};

/// 書籍一覧取得のクエリパラメータ
///
/// 型が合わない値（例: `pageNumber=abc`）はaxumのQuery抽出で400になる。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    /// 1始まりのページ番号
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    /// 1ページあたりの件数
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// "desc"（大文字小文字を区別しない）で降順、それ以外は昇順
    pub sort_order: Option<String>,
}

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ListBooksQuery {
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
            .as_deref()
            .map(SortOrder::from_query)
            .unwrap_or_default()
    }
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub classification: String,
    pub category: String,
    pub page_count: i32,
    pub price: f64,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.book_id.value(),
            title: book.title,
            author: book.author,
            publisher: book.publisher,
            isbn: book.isbn,
            classification: book.classification,
            category: book.category,
            page_count: book.page_count,
            price: book.price,
        }
    }
}

impl From<BookResponse> for Book {
    fn from(response: BookResponse) -> Self {
        Self {
            book_id: BookId::from_i32(response.book_id),
            title: response.title,
            author: response.author,
            publisher: response.publisher,
            isbn: response.isbn,
            classification: response.classification,
            category: response.category,
            page_count: response.page_count,
            price: response.price,
        }
    }
}

/// ページング情報レスポンス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub current_page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl From<PaginationInfo> for PaginationResponse {
    fn from(info: PaginationInfo) -> Self {
        Self {
            current_page: info.current_page,
            page_size: info.page_size,
            total_count: info.total_count,
            total_pages: info.total_pages,
        }
    }
}

impl From<PaginationResponse> for PaginationInfo {
    fn from(response: PaginationResponse) -> Self {
        Self {
            current_page: response.current_page,
            page_size: response.page_size,
            total_count: response.total_count,
            total_pages: response.total_pages,
        }
    }
}

/// 書籍一覧レスポンス（GET /api/books）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPageResponse {
    pub data: Vec<BookResponse>,
    pub pagination: PaginationResponse,
}

impl From<BookPage> for BookPageResponse {
    fn from(page: BookPage) -> Self {
        Self {
            data: page.data.into_iter().map(BookResponse::from).collect(),
            pagination: page.pagination.into(),
        }
    }
}

impl From<BookPageResponse> for BookPage {
    fn from(response: BookPageResponse) -> Self {
        Self {
            data: response.data.into_iter().map(Book::from).collect(),
            pagination: response.pagination.into(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
