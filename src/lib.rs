//! Relatório de trades grandes - Polymarket Data API
//!
//! Busca uma página de trades recentes, mantém os que têm `size` acima do
//! limite e imprime cada um em um bloco de layout fixo no console.
//!
//! Fluxo (linear, executado uma vez): buscar → filtrar → formatar → imprimir.

pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod report;
pub mod types;

pub use config::{Config, DisplayTimezone};
pub use error::{ReportError, Result};
pub use fetch::{FileTradeSource, HttpTradeSource, TradeSource};
pub use report::run;
pub use types::{ReportOutcome, TradeRecord};
