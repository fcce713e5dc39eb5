//! Tipos e estruturas de dados

use serde::Deserialize;

/// Trade como retornado pelo endpoint `/trades`.
///
/// Todos os campos são opcionais na desserialização: os padrões
/// (`size` = 0, slugs desconhecidos) são aplicados onde o valor é usado.
/// Campos extras do JSON são ignorados.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub size: Option<f64>,
    pub timestamp: Option<i64>, // Segundos desde epoch
    pub price: Option<f64>,
    pub side: Option<String>,
    pub slug: Option<String>,       // Mercado
    pub event_slug: Option<String>, // Evento
    pub condition_id: Option<String>,
}

impl TradeRecord {
    /// Tamanho usado no filtro (ausente conta como 0).
    pub fn size_or_zero(&self) -> f64 {
        self.size.unwrap_or(0.0)
    }

    pub fn market(&self) -> &str {
        self.slug.as_deref().unwrap_or("unknown-market")
    }

    pub fn event(&self) -> &str {
        self.event_slug.as_deref().unwrap_or("unknown-event")
    }

    /// Link da página do evento, se o trade tiver `eventSlug`.
    pub fn event_url(&self) -> Option<String> {
        self.event_slug
            .as_deref()
            .map(|slug| format!("https://polymarket.com/event/{}", slug))
    }

    /// Impressão digital do trade: `conditionId-timestamp-size-price-side`.
    ///
    /// Partes ausentes ficam vazias.
    pub fn fingerprint(&self) -> String {
        fn part<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(|v| v.to_string()).unwrap_or_default()
        }

        format!(
            "{}-{}-{}-{}-{}",
            part(&self.condition_id),
            part(&self.timestamp),
            part(&self.size),
            part(&self.price),
            part(&self.side),
        )
    }
}

/// Desfecho de uma execução bem-sucedida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Nenhum trade passou do limite; apenas a mensagem foi impressa.
    NoTrades,
    /// Relatório completo impresso com `n` blocos.
    Printed(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "size": 5000,
            "timestamp": 1700000000,
            "price": 0.65,
            "side": "BUY",
            "slug": "will-x-happen",
            "eventSlug": "event-x",
            "conditionId": "0xabc",
            "proxyWallet": "0xignored"
        }"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(trade.size, Some(5000.0));
        assert_eq!(trade.timestamp, Some(1_700_000_000));
        assert_eq!(trade.event_slug.as_deref(), Some("event-x"));
        assert_eq!(trade.condition_id.as_deref(), Some("0xabc"));
    }

    #[test]
    fn missing_slugs_use_placeholders() {
        let trade = TradeRecord::default();
        assert_eq!(trade.market(), "unknown-market");
        assert_eq!(trade.event(), "unknown-event");
        assert_eq!(trade.size_or_zero(), 0.0);
        assert_eq!(trade.event_url(), None);
    }

    #[test]
    fn fingerprint_joins_parts() {
        let trade = TradeRecord {
            size: Some(1500.5),
            timestamp: Some(10),
            price: Some(0.5),
            side: Some("SELL".into()),
            condition_id: Some("0xc".into()),
            ..Default::default()
        };
        assert_eq!(trade.fingerprint(), "0xc-10-1500.5-0.5-SELL");
        assert_eq!(TradeRecord::default().fingerprint(), "----");
    }
}
