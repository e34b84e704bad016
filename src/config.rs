use std::str::FromStr;
use thiserror::Error;

/// 設定の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 環境変数の値を解釈できない
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// サーバー設定
///
/// 環境変数から読み込む。`.env`ファイルがあれば先に読み込まれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub database_max_connections: u32,
    /// 未指定の場合はすべてのオリジンを許可
    pub cors_allowed_origin: Option<String>,
    pub run_migrations: bool,
}

impl Config {
    pub const DEFAULT_DATABASE_URL: &'static str = "postgres://localhost/bookstore";
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 5260;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// `.env`とプロセスの環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        // .envが存在しなくてもエラーにしない
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を構築する
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", Self::DEFAULT_PORT)?,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                Self::DEFAULT_MAX_CONNECTIONS,
            )?,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|v| !v.trim().is_empty()),
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
        })
    }

    /// バインドするアドレス（例: `0.0.0.0:5260`）
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// クライアント（catalog_view）の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5260";

    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("CATALOG_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
