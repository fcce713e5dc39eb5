//! Formatação de valores para o relatório

use crate::config::DisplayTimezone;
use crate::error::{ReportError, Result};
use chrono::{DateTime, Local, TimeZone, Utc};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Insere separadores de milhar (`,`) na parte inteira de um número já
/// formatado, ex.: `"-12345.67"` → `"-12,345.67"`.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Valor monetário: `$`, separador de milhar e duas casas (`$12,345.67`).
///
/// Negativos ficam `$-1,234.50`.
pub fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.2}", value)))
}

/// Limite do cabeçalho: inteiro agrupado quando não há fração
/// (`1000` → `1,000`), senão com duas casas.
pub fn format_threshold(value: f64) -> String {
    if value.fract() == 0.0 {
        group_thousands(&format!("{:.0}", value))
    } else {
        group_thousands(&format!("{:.2}", value))
    }
}

/// Preço com três casas decimais (`0.875`).
pub fn format_price(value: f64) -> String {
    format!("{:.3}", value)
}

fn render<Tz: TimeZone>(dt: Option<DateTime<Tz>>, ts: i64) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    dt.map(|dt| dt.format(TIME_FORMAT).to_string())
        .ok_or(ReportError::InvalidTimestamp(ts))
}

/// Converte segundos desde epoch para `YYYY-MM-DD HH:MM:SS` no fuso pedido.
pub fn format_timestamp(ts: i64, tz: DisplayTimezone) -> Result<String> {
    match tz {
        DisplayTimezone::Local => render(Local.timestamp_opt(ts, 0).single(), ts),
        DisplayTimezone::Utc => render(Utc.timestamp_opt(ts, 0).single(), ts),
        DisplayTimezone::Fixed(offset) => render(offset.timestamp_opt(ts, 0).single(), ts),
    }
}
