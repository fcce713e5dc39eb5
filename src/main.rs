//! Trades Grandes - Polymarket Data API
//!
//! Faz uma única requisição ao endpoint de trades, filtra pelo tamanho mínimo
//! e imprime os trades encontrados no console. Sem estado entre execuções.
//!
//! Uso:
//!   ./target/release/large-trades
//!   MIN_SIZE=10000 REPORT_TZ=utc ./target/release/large-trades --links
//!   ./target/release/large-trades --from-file trades.json

use anyhow::{Context, Result};
use clap::Parser;
use large_trades::{Config, FileTradeSource, HttpTradeSource, ReportOutcome, TradeSource};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Logs vão para o stderr; o stdout é só do relatório.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // ========================================================================
    // Configuração (flags ou variáveis de ambiente)
    // ========================================================================

    let config = Config::parse();
    init_logging(config.verbose);
    debug!(?config, "configuração carregada");

    // ========================================================================
    // Origem dos dados
    // ========================================================================

    let source: Box<dyn TradeSource + Send + Sync> = match &config.from_file {
        Some(path) => Box::new(FileTradeSource::new(path)),
        None => Box::new(
            HttpTradeSource::from_config(&config).context("falha ao criar cliente HTTP")?,
        ),
    };

    // ========================================================================
    // Busca → filtro → relatório
    // ========================================================================

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = large_trades::run(&*source, &config, &mut out)
        .await
        .context("não foi possível gerar o relatório de trades")?;

    match outcome {
        ReportOutcome::NoTrades => info!(min_size = config.min_size, "nenhum trade acima do limite"),
        ReportOutcome::Printed(n) => debug!(n, "relatório impresso"),
    }

    Ok(())
}
