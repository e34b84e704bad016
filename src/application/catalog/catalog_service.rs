use crate::domain::{BookPage, PageRequest, PaginationInfo};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{CatalogApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
}

/// 書籍カタログの1ページを取得する（純粋な関数）
///
/// 処理フロー：
/// 1. カタログ全体の件数を取得（ページングの影響を受けない）
/// 2. タイトル順に並べ、(page_number - 1) * page_size 件をスキップし page_size 件を取得
/// 3. ページング情報を算出
///
/// 最終ページを超えるページ番号はエラーではなく、空のdataを返す。
/// 読み取り専用で副作用はない。
///
/// # エラー
/// - CatalogError: BookCatalogのI/Oエラー
pub async fn get_book_page(deps: &ServiceDependencies, request: PageRequest) -> Result<BookPage> {
    tracing::debug!(
        page_number = request.page_number(),
        page_size = request.page_size(),
        sort_order = %request.sort_order(),
        "fetching book page"
    );

    let total_count = deps
        .book_catalog
        .count()
        .await
        .map_err(CatalogApplicationError::CatalogError)?;

    let data = deps
        .book_catalog
        .fetch_page(request.sort_order(), request.offset(), request.limit())
        .await
        .map_err(CatalogApplicationError::CatalogError)?;

    let pagination = PaginationInfo::new(request.page_number(), request.page_size(), total_count);

    tracing::debug!(
        returned = data.len(),
        total_count,
        total_pages = pagination.total_pages,
        "book page fetched"
    );

    Ok(BookPage { data, pagination })
}
