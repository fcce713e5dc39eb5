//! Erros do pipeline busca → filtro → relatório

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("falha na requisição HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint respondeu {status} para {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("resposta não é uma lista de trades válida: {0}")]
    Json(#[from] serde_json::Error),

    #[error("trade #{index} sem o campo obrigatório `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("timestamp fora do intervalo suportado: {0}")]
    InvalidTimestamp(i64),

    #[error("erro de I/O: {0}")]
    Io(#[from] std::io::Error),
}
