use crate::domain::{Book, BookId, SortOrder};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

const FETCH_PAGE_ASC: &str = r#"
    SELECT
        book_id,
        title,
        author,
        publisher,
        isbn,
        classification,
        category,
        page_count,
        price
    FROM books
    ORDER BY title COLLATE "C" ASC, book_id ASC
    LIMIT $1 OFFSET $2
"#;

const FETCH_PAGE_DESC: &str = r#"
    SELECT
        book_id,
        title,
        author,
        publisher,
        isbn,
        classification,
        category,
        page_count,
        price
    FROM books
    ORDER BY title COLLATE "C" DESC, book_id ASC
    LIMIT $1 OFFSET $2
"#;

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    Ok(Book {
        book_id: BookId::from_i32(row.try_get("book_id")?),
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        publisher: row.try_get("publisher")?,
        isbn: row.try_get("isbn")?,
        classification: row.try_get("classification")?,
        category: row.try_get("category")?,
        page_count: row.try_get("page_count")?,
        price: row.try_get("price")?,
    })
}

/// BookCatalogのPostgreSQL実装
///
/// `books`テーブルを読み取り専用で参照する。
/// ソート方向はバインドできないため、方向ごとに固定のSQLを使い分ける。
/// タイトルはロケールに依存しないバイト順（`COLLATE "C"`）で比較する。
pub struct BookCatalog {
    pool: PgPool,
}

impl BookCatalog {
    /// PostgreSQLコネクションプールから新しいBookCatalogを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// タイトル順の1ページを取得
    ///
    /// titleのインデックスを使用し、同一タイトルはbook_idで順序を確定させる。
    async fn fetch_page(
        &self,
        sort_order: SortOrder,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Book>> {
        let sql = match sort_order {
            SortOrder::Asc => FETCH_PAGE_ASC,
            SortOrder::Desc => FETCH_PAGE_DESC,
        };

        let rows = sqlx::query(sql)
            .bind(limit.max(0))
            .bind(offset.max(0))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_row_to_book).collect()
    }
}
