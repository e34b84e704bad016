use serde::{Deserialize, Serialize};

use super::{Book, PageRequestError};

/// ページ番号の既定値（1始まり）
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// ページサイズの既定値
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// タイトルのソート順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// クエリ文字列からソート順を決定する
    ///
    /// 大文字小文字を区別せず "desc" と一致した場合のみ降順。
    /// それ以外（空文字、タイプミスを含む）はすべて昇順として扱う。
    pub fn from_query(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// 昇順 ↔ 降順を反転する
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ページ要求
///
/// 不変条件：
/// - page_number >= 1
/// - page_size >= 1
/// - (page_number - 1) * page_size がi64に収まる
///
/// 不正な値の組み合わせは`new`で拒否されるため、
/// このオブジェクトが存在する時点でoffset計算は常に安全。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page_number: i64,
    page_size: i64,
    sort_order: SortOrder,
    offset: i64,
}

impl PageRequest {
    /// ページ要求を検証して作成する
    ///
    /// # エラー
    /// - `InvalidPageNumber`: page_numberが1未満
    /// - `InvalidPageSize`: page_sizeが1未満
    /// - `OffsetOverflow`: スキップ件数の計算がオーバーフローする
    pub fn new(
        page_number: i64,
        page_size: i64,
        sort_order: SortOrder,
    ) -> Result<Self, PageRequestError> {
        if page_size < 1 {
            return Err(PageRequestError::InvalidPageSize(page_size));
        }
        if page_number < 1 {
            return Err(PageRequestError::InvalidPageNumber(page_number));
        }

        let offset = (page_number - 1).checked_mul(page_size).ok_or(
            PageRequestError::OffsetOverflow {
                page_number,
                page_size,
            },
        )?;

        Ok(Self {
            page_number,
            page_size,
            sort_order,
            offset,
        })
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// スキップする件数: (page_number - 1) * page_size
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// 取得する最大件数
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            sort_order: SortOrder::Asc,
            offset: 0,
        }
    }
}

/// ページング情報
///
/// total_countはページングの影響を受けないカタログ全体の件数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    /// 件数からページング情報を算出する
    ///
    /// total_pages = ceil(total_count / page_size)。
    /// page_sizeが1未満の場合は総ページ数0とする（PageRequest経由では発生しない）。
    pub fn new(current_page: i64, page_size: i64, total_count: i64) -> Self {
        Self {
            current_page,
            page_size,
            total_count,
            total_pages: total_pages(total_count, page_size),
        }
    }

    /// 最初の応答を受け取る前の状態
    pub fn empty(page_size: i64) -> Self {
        Self {
            current_page: DEFAULT_PAGE_NUMBER,
            page_size,
            total_count: 0,
            total_pages: 0,
        }
    }
}

/// ceil(total_count / page_size)
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if page_size < 1 || total_count <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

/// 書籍の1ページ分と、そのページング情報
#[derive(Debug, Clone, PartialEq)]
pub struct BookPage {
    pub data: Vec<Book>,
    pub pagination: PaginationInfo,
}

/// タイトル順に書籍を比較する
///
/// タイトルが等しい場合はbook_idの昇順で安定させ、
/// 同一クエリの結果が常に同じ順序になるようにする。
pub fn compare_by_title(a: &Book, b: &Book, order: SortOrder) -> std::cmp::Ordering {
    let by_title = match order {
        SortOrder::Asc => a.title.cmp(&b.title),
        SortOrder::Desc => b.title.cmp(&a.title),
    };
    by_title.then_with(|| a.book_id.cmp(&b.book_id))
}
