use crate::domain::{Book, SortOrder, compare_by_title};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// BookCatalogのインメモリ実装
///
/// テストやデータベースなしでの起動に使用する。
/// 書籍を登録でき、ストレージ障害を模擬することもできる。
pub struct BookCatalog {
    books: RwLock<Vec<Book>>,
    unavailable: AtomicBool,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
            unavailable: AtomicBool::new(false),
        }
    }

    /// テスト用に書籍を登録
    pub fn add_book(&self, book: Book) {
        self.books
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(book);
    }

    /// 以降のクエリをストレージ障害として失敗させる
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err("book catalog storage is unavailable".into());
        }
        Ok(())
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn count(&self) -> Result<i64> {
        self.ensure_available()?;
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        Ok(i64::try_from(books.len())?)
    }

    async fn fetch_page(
        &self,
        sort_order: SortOrder,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Book>> {
        self.ensure_available()?;

        let mut sorted = self
            .books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        sorted.sort_by(|a, b| compare_by_title(a, b, sort_order));

        // 負の値は0件として扱う（usizeに変換できない巨大値はスキップで空になる）
        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        Ok(sorted.into_iter().skip(offset).take(limit).collect())
    }
}
