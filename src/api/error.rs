use crate::application::catalog::CatalogApplicationError;
use crate::domain::PageRequestError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(CatalogApplicationError);

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError(err)
    }
}

impl From<PageRequestError> for ApiError {
    fn from(err: PageRequestError) -> Self {
        ApiError(CatalogApplicationError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 400 Bad Request - ページングとして成立しない要求
            CatalogApplicationError::InvalidPageRequest(ref e) => {
                let error_type = match e {
                    PageRequestError::InvalidPageNumber(_) => "INVALID_PAGE_NUMBER",
                    PageRequestError::InvalidPageSize(_) => "INVALID_PAGE_SIZE",
                    PageRequestError::OffsetOverflow { .. } => "PAGE_OUT_OF_RANGE",
                };
                (StatusCode::BAD_REQUEST, error_type, e.to_string())
            }

            // 500 Internal Server Error - ストレージ障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CatalogApplicationError::CatalogError(ref e) => {
                tracing::error!("Book catalog error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_UNAVAILABLE",
                    "Failed to query the book catalog".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
