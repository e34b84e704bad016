use crate::api::types::BookPageResponse;
use crate::domain::{BookPage, PageRequest};
use async_trait::async_trait;

/// カタログクライアントのエラー
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 接続失敗などHTTPリクエスト自体の失敗
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 2xx以外のステータス（本文はそのまま保持する）
    #[error("catalog API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// カタログ照会ポート（クライアント側）
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// 指定したページを取得する
    async fn fetch_page(&self, request: &PageRequest) -> Result<BookPage, ClientError>;
}

/// CatalogApiのHTTP実装（`GET /api/books`）
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// `base_url`はサーバーのオリジン（例：`http://localhost:5260`）
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// 既存のreqwest::Clientを使って作成
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn books_url(&self) -> String {
        format!("{}/api/books", self.base_url)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_page(&self, request: &PageRequest) -> Result<BookPage, ClientError> {
        let response = self
            .client
            .get(self.books_url())
            .query(&[
                ("pageNumber", request.page_number().to_string()),
                ("pageSize", request.page_size().to_string()),
                ("sortOrder", request.sort_order().as_str().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let page: BookPageResponse = serde_json::from_slice(&bytes)?;

        Ok(page.into())
    }
}
