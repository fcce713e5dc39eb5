//! Seleção dos trades grandes

use crate::types::TradeRecord;
use std::collections::HashSet;

/// Mantém os trades com `size >= min_size` (ausente conta como 0),
/// preservando a ordem recebida.
pub fn filter_large_trades(trades: Vec<TradeRecord>, min_size: f64) -> Vec<TradeRecord> {
    trades
        .into_iter()
        .filter(|t| t.size_or_zero() >= min_size)
        .collect()
}

/// Remove trades cuja impressão digital já apareceu antes na lista.
pub fn dedup_trades(trades: Vec<TradeRecord>) -> Vec<TradeRecord> {
    let mut seen = HashSet::new();
    trades
        .into_iter()
        .filter(|t| seen.insert(t.fingerprint()))
        .collect()
}
