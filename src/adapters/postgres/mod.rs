pub mod book_catalog;

// パブリックに型を再エクスポート
pub use book_catalog::BookCatalog as PostgresBookCatalog;
