use thiserror::Error;

/// ページ要求の構築エラー
///
/// 呼び出し側が指定したページ番号・ページサイズが
/// ページングとして意味をなさない場合に返される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// ページ番号が1未満
    #[error("pageNumber must be at least 1 (got {0})")]
    InvalidPageNumber(i64),

    /// ページサイズが1未満（0除算の防止）
    #[error("pageSize must be at least 1 (got {0})")]
    InvalidPageSize(i64),

    /// (pageNumber - 1) * pageSize がi64に収まらない
    #[error("page {page_number} with size {page_size} is out of range")]
    OffsetOverflow { page_number: i64, page_size: i64 },
}
