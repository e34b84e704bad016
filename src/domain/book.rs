use serde::{Deserialize, Serialize};

/// 書籍ID - カタログ内で一意、サーバー側で採番される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(i32);

impl BookId {
    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 書籍（読み取り専用の射影）
///
/// このシステムには書籍を変更する経路は存在しない。
/// titleがソートキーとなる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub classification: String,
    pub category: String,
    /// ページ数（非負）
    pub page_count: i32,
    /// 価格（非負）
    pub price: f64,
}

impl Book {
    /// 表示用の価格文字列（例: `$14.99`）
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
