// DATABASE_URLで指定したデータベースが必要なため、既定では実行しない。
// `cargo test -- --ignored` で実行する。

mod common;

use book_catalog::adapters::postgres::PostgresBookCatalog;
use book_catalog::domain::{SortOrder, compare_by_title};
use book_catalog::ports::BookCatalog;
use serial_test::serial;

/// 全ページを順に取得してタイトルを連結する
async fn collect_titles(
    catalog: &PostgresBookCatalog,
    sort_order: SortOrder,
    limit: i64,
) -> Vec<String> {
    let total = catalog.count().await.unwrap();
    let mut titles = Vec::new();
    let mut offset = 0;

    while offset < total {
        let page = catalog.fetch_page(sort_order, offset, limit).await.unwrap();
        assert!(page.len() as i64 <= limit);
        titles.extend(page.into_iter().map(|b| b.title));
        offset += limit;
    }
    titles
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_count_matches_table() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresBookCatalog::new(pool.clone());

    let expected: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(catalog.count().await.unwrap(), expected);
    // シードデータが投入されていること
    assert!(expected >= 12);
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_descending_is_reverse_of_ascending() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresBookCatalog::new(pool);

    let asc = collect_titles(&catalog, SortOrder::Asc, 5).await;
    let mut desc = collect_titles(&catalog, SortOrder::Desc, 5).await;
    desc.reverse();

    assert_eq!(asc.len() as i64, catalog.count().await.unwrap());
    assert_eq!(asc, desc);
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_pages_do_not_overlap() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresBookCatalog::new(pool);

    let in_pages = collect_titles(&catalog, SortOrder::Asc, 5).await;
    let in_one = collect_titles(&catalog, SortOrder::Asc, 1000).await;

    assert_eq!(in_pages, in_one);
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_offset_beyond_catalog_is_empty() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresBookCatalog::new(pool);
    let total = catalog.count().await.unwrap();

    let page = catalog
        .fetch_page(SortOrder::Asc, total + 5, 5)
        .await
        .unwrap();

    assert!(page.is_empty());
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_fetch_page_is_idempotent() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresBookCatalog::new(pool);

    let first = catalog.fetch_page(SortOrder::Desc, 5, 5).await.unwrap();
    let second = catalog.fetch_page(SortOrder::Desc, 5, 5).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_title_order_matches_in_memory_order() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresBookCatalog::new(pool.clone());

    // 大文字小文字と記号でロケール順とバイト順が分かれるタイトル
    let mut inserted = Vec::new();
    for title in ["zebra stripes", "Zebra", "_underscore", "éclair", "Apple"] {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO books (title, author, publisher, isbn, classification, category, page_count, price)
             VALUES ($1, 'Author', 'Publisher', 'isbn', 'Fiction', 'Test', 1, 1.0)
             RETURNING book_id",
        )
        .bind(title)
        .fetch_one(&pool)
        .await
        .unwrap();
        inserted.push(id);
    }

    let total = catalog.count().await.unwrap();
    for order in [SortOrder::Asc, SortOrder::Desc] {
        let fetched = catalog.fetch_page(order, 0, total).await.unwrap();
        let mut expected = fetched.clone();
        expected.sort_by(|a, b| compare_by_title(a, b, order));
        assert_eq!(fetched, expected, "{order} order differs from in-memory order");
    }

    sqlx::query("DELETE FROM books WHERE book_id = ANY($1)")
        .bind(inserted.as_slice())
        .execute(&pool)
        .await
        .unwrap();
}
