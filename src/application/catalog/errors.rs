use crate::domain::PageRequestError;
use thiserror::Error;

/// カタログ照会アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// ページ要求が不正（ページ番号・ページサイズ）
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(#[from] PageRequestError),

    /// BookCatalogのエラー
    #[error("Book catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
