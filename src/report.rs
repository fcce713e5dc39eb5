//! Montagem e escrita do relatório no console
//!
//! O relatório inteiro é montado em um buffer antes de ser escrito: se algum
//! trade estiver malformado, nada chega ao stdout. A escrita é um único
//! `write_all` seguido de `flush`.

use crate::config::{Config, DisplayTimezone};
use crate::error::{ReportError, Result};
use crate::fetch::TradeSource;
use crate::filter::{dedup_trades, filter_large_trades};
use crate::format::{format_price, format_threshold, format_timestamp, format_usd};
use crate::types::{ReportOutcome, TradeRecord};
use std::fmt::Write as _;
use std::io::Write;
use tracing::info;

pub const NO_TRADES_MESSAGE: &str = "no trades > 10k found.";
const SEPARATOR_WIDTH: usize = 72;

/// Opções de apresentação de cada bloco.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub min_size: f64,
    pub timezone: DisplayTimezone,
    pub links: bool,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            min_size: config.min_size,
            timezone: config.timezone,
            links: config.links,
        }
    }
}

fn required<'a, T>(value: &'a Option<T>, index: usize, field: &'static str) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or(ReportError::MissingField { index, field })
}

/// Monta o texto completo do relatório para trades já filtrados.
///
/// Lista vazia vira apenas a mensagem de "nenhum trade".
pub fn render_report(trades: &[TradeRecord], opts: &RenderOptions) -> Result<String> {
    if trades.is_empty() {
        return Ok(format!("{}\n", NO_TRADES_MESSAGE));
    }

    let separator = "─".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    // `fmt::Write` para String não falha
    let _ = write!(out, "\n trades >= ${}\n\n", format_threshold(opts.min_size));

    for (index, t) in trades.iter().enumerate() {
        let ts = *required(&t.timestamp, index, "timestamp")?;
        let price = *required(&t.price, index, "price")?;
        let side = required(&t.side, index, "side")?;

        let _ = writeln!(out, "{}", separator);
        let _ = writeln!(out, "Time:   {}", format_timestamp(ts, opts.timezone)?);
        let _ = writeln!(out, "Event:  {}", t.event());
        let _ = writeln!(out, "Market: {}", t.market());
        if opts.links {
            if let Some(url) = t.event_url() {
                let _ = writeln!(out, "Link:   {}", url);
            }
        }
        let _ = writeln!(out, "Side:   {}", side);
        let _ = writeln!(out, "Size:   {}", format_usd(t.size_or_zero()));
        let _ = writeln!(out, "Price:  {}", format_price(price));
    }

    out.push_str("\nDone.\n\n");
    Ok(out)
}

/// Executa o pipeline completo: busca → filtro → relatório → `out`.
///
/// Retorna o desfecho em vez de encerrar o processo; quem chama decide o
/// código de saída.
pub async fn run<S, W>(source: &S, config: &Config, out: &mut W) -> Result<ReportOutcome>
where
    S: TradeSource + ?Sized + Sync,
    W: Write,
{
    let trades = source.fetch_trades().await?;
    let total = trades.len();

    let mut large = filter_large_trades(trades, config.min_size);
    if config.dedup {
        large = dedup_trades(large);
    }
    info!(total, kept = large.len(), min_size = config.min_size, "trades filtrados");

    let report = render_report(&large, &RenderOptions::from(config))?;
    out.write_all(report.as_bytes())?;
    out.flush()?;

    if large.is_empty() {
        Ok(ReportOutcome::NoTrades)
    } else {
        Ok(ReportOutcome::Printed(large.len()))
    }
}
