//! Configuração via linha de comando e variáveis de ambiente
//!
//! Todo flag também pode vir de uma variável de ambiente, e os valores
//! padrão reproduzem o relatório original (limit=1000, tamanho mínimo 1000,
//! fuso horário local).

use chrono::FixedOffset;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://data-api.polymarket.com/trades";
pub const DEFAULT_LIMIT: u32 = 1000;
pub const DEFAULT_MIN_SIZE: f64 = 1_000.0;

/// Fuso horário usado para exibir os timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayTimezone {
    /// Fuso do sistema onde o processo roda.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for DisplayTimezone {
    type Err = String;

    /// Aceita `local`, `utc` ou um offset `+HH:MM` / `-HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(DisplayTimezone::Local),
            "utc" | "z" => return Ok(DisplayTimezone::Utc),
            _ => {}
        }

        let invalid = || format!("fuso inválido `{}` (use local, utc ou +HH:MM)", s);

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..60).contains(&minutes) {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(DisplayTimezone::Fixed)
            .ok_or_else(invalid)
    }
}

fn parse_min_size(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .replace('_', "")
        .parse()
        .map_err(|_| format!("tamanho mínimo inválido `{}`", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("tamanho mínimo inválido `{}`", s))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Lista os trades grandes mais recentes da Polymarket", long_about = None)]
pub struct Config {
    /// Endpoint de listagem de trades
    #[arg(long, env = "TRADES_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Quantidade de trades pedida ao endpoint (uma única página)
    #[arg(long, env = "TRADES_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Tamanho mínimo (inclusivo) para um trade entrar no relatório
    #[arg(long, env = "MIN_SIZE", default_value_t = DEFAULT_MIN_SIZE, value_parser = parse_min_size)]
    pub min_size: f64,

    /// Fuso para exibir horários: local, utc ou +HH:MM
    #[arg(long, env = "REPORT_TZ", default_value = "local")]
    pub timezone: DisplayTimezone,

    /// Timeout da requisição HTTP em segundos (padrão: o do cliente)
    #[arg(long, env = "HTTP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Lê a resposta de um arquivo JSON em vez de chamar o endpoint
    #[arg(long, env = "TRADES_FILE")]
    pub from_file: Option<PathBuf>,

    /// Mostra o link do evento em cada trade
    #[arg(long, env = "SHOW_LINKS")]
    pub links: bool,

    /// Remove trades repetidos na mesma página
    #[arg(long, env = "DEDUP_TRADES")]
    pub dedup: bool,

    /// Logs detalhados no stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            limit: DEFAULT_LIMIT,
            min_size: DEFAULT_MIN_SIZE,
            timezone: DisplayTimezone::Local,
            timeout_secs: None,
            from_file: None,
            links: false,
            dedup: false,
            verbose: false,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timezones() {
        assert_eq!("local".parse::<DisplayTimezone>(), Ok(DisplayTimezone::Local));
        assert_eq!("UTC".parse::<DisplayTimezone>(), Ok(DisplayTimezone::Utc));
        assert_eq!(
            "+02:30".parse::<DisplayTimezone>(),
            Ok(DisplayTimezone::Fixed(FixedOffset::east_opt(9000).unwrap()))
        );
        assert_eq!(
            "-03:00".parse::<DisplayTimezone>(),
            Ok(DisplayTimezone::Fixed(FixedOffset::west_opt(10800).unwrap()))
        );
        assert!("03:00".parse::<DisplayTimezone>().is_err());
        assert!("+03:75".parse::<DisplayTimezone>().is_err());
        assert!("+30:00".parse::<DisplayTimezone>().is_err());
    }

    #[test]
    fn cli_defaults_match_original_report() {
        let config = Config::try_parse_from(["large-trades"]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.limit, 1000);
        assert_eq!(config.min_size, 1000.0);
        assert_eq!(config.timezone, DisplayTimezone::Local);
        assert!(!config.links);
        assert!(!config.dedup);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn cli_overrides() {
        let config = Config::try_parse_from([
            "large-trades",
            "--min-size",
            "10_000",
            "--timezone",
            "utc",
            "--timeout-secs",
            "5",
            "--links",
        ])
        .unwrap();
        assert_eq!(config.min_size, 10_000.0);
        assert_eq!(config.timezone, DisplayTimezone::Utc);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert!(config.links);
    }
}
