use crate::application::catalog::{ServiceDependencies, get_book_page};
use crate::domain::PageRequest;
use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookPageResponse, ListBooksQuery},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// GET /api/books - タイトル順の書籍一覧（ページング付き）
///
/// クエリパラメータ:
/// - pageNumber: 1始まりのページ番号（既定値 1）
/// - pageSize: 1ページあたりの件数（既定値 5）
/// - sortOrder: "desc"（大文字小文字を区別しない）で降順、それ以外は昇順（既定値 "asc"）
///
/// pageNumber・pageSizeが1未満の場合は400を返す。
/// 最終ページを超えるpageNumberは空のdataとして200を返す。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<BookPageResponse>, ApiError> {
    let request = PageRequest::new(query.page_number, query.page_size, query.sort_order())?;

    let page = get_book_page(&state.service_deps, request).await?;

    Ok(Json(BookPageResponse::from(page)))
}
