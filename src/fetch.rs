//! Busca dos trades (HTTP ou arquivo local)

use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::types::TradeRecord;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Origem de uma página de trades.
///
/// O pipeline só conhece esta trait, o que permite trocar a chamada de
/// rede por uma resposta fixa nos testes.
#[async_trait]
pub trait TradeSource {
    async fn fetch_trades(&self) -> Result<Vec<TradeRecord>>;
}

/// Desserializa o corpo da resposta (lista JSON de trades).
pub fn parse_trades(body: &[u8]) -> Result<Vec<TradeRecord>> {
    Ok(serde_json::from_slice(body)?)
}

// ============================================================================
// HTTP
// ============================================================================

/// Uma única requisição `GET <url>?limit=<n>`, sem autenticação.
pub struct HttpTradeSource {
    client: reqwest::Client,
    url: String,
    limit: u32,
}

impl HttpTradeSource {
    pub fn new(url: impl Into<String>, limit: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            limit,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.api_url.clone(),
            limit: config.limit,
        })
    }
}

#[async_trait]
impl TradeSource for HttpTradeSource {
    async fn fetch_trades(&self) -> Result<Vec<TradeRecord>> {
        info!(url = %self.url, limit = self.limit, "buscando trades");

        let response = self
            .client
            .get(&self.url)
            .query(&[("limit", self.limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "resposta recebida");

        let trades = parse_trades(&body)?;
        info!(count = trades.len(), "trades recebidos");
        Ok(trades)
    }
}

// ============================================================================
// Arquivo local
// ============================================================================

/// Lê uma resposta salva anteriormente (mesmo formato do endpoint).
pub struct FileTradeSource {
    path: PathBuf,
}

impl FileTradeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TradeSource for FileTradeSource {
    async fn fetch_trades(&self) -> Result<Vec<TradeRecord>> {
        info!(path = %self.path.display(), "lendo trades do arquivo");
        let body = tokio::fs::read(&self.path).await?;
        let trades = parse_trades(&body)?;
        info!(count = trades.len(), "trades lidos");
        Ok(trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_trades() {
        let body = br#"[{"size": 500, "timestamp": 1700000000, "price": 0.5, "side": "SELL"}, {}]"#;
        let trades = parse_trades(body).unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].side.as_deref(), Some("SELL"));
        assert_eq!(trades[1], TradeRecord::default());
    }

    #[test]
    fn rejects_non_array_body() {
        assert!(matches!(
            parse_trades(br#"{"error": "nope"}"#),
            Err(ReportError::Json(_))
        ));
        assert!(matches!(parse_trades(b"<html>"), Err(ReportError::Json(_))));
    }

    #[tokio::test]
    async fn reads_saved_response_from_file() {
        let path = std::env::temp_dir().join(format!("large-trades-{}.json", std::process::id()));
        tokio::fs::write(&path, br#"[{"size": 2000, "side": "BUY"}]"#)
            .await
            .unwrap();

        let trades = FileTradeSource::new(&path).fetch_trades().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].size, Some(2000.0));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileTradeSource::new("/nonexistent/large-trades.json");
        assert!(matches!(
            source.fetch_trades().await,
            Err(ReportError::Io(_))
        ));
    }
}
