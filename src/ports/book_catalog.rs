use crate::domain::{Book, SortOrder};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍カタログ読み取りポート
///
/// カタログ全体への読み取り専用アクセスを抽象化する。
/// 書き込み操作は持たない。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// カタログ全体の件数を返す
    ///
    /// ページングの影響を受けない総件数（total_count）の算出に使用される。
    async fn count(&self) -> Result<i64>;

    /// タイトル順に並べたカタログから1ページ分を取得する
    ///
    /// `offset`件をスキップし、最大`limit`件を返す。
    /// タイトルが等しい書籍はbook_idの昇順で並べること。
    /// offsetがカタログの件数以上の場合は空のVecを返す（エラーではない）。
    async fn fetch_page(&self, sort_order: SortOrder, offset: i64, limit: i64)
    -> Result<Vec<Book>>;
}
