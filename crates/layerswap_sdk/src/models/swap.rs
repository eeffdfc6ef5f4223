use super::EndpointCategory;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    Created,
    Pending,
    Initiated,
    Completed,
    Failed,
    Expired,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Created => "created",
            SwapStatus::Pending => "pending",
            SwapStatus::Initiated => "initiated",
            SwapStatus::Completed => "completed",
            SwapStatus::Failed => "failed",
            SwapStatus::Expired => "expired",
            SwapStatus::Cancelled => "cancelled",
            SwapStatus::Unknown => "unknown",
        }
    }

    /// The output transaction is only populated once a swap reaches this state.
    pub fn is_completed(&self) -> bool {
        matches!(self, SwapStatus::Completed)
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    pub amount: Option<f64>,
    pub transaction_id: Option<String>,
}

/// A swap as returned by `GET /api/swaps/{id}`.
///
/// Every field besides the identifier is optional on the wire; rendering code is expected to
/// tolerate gaps rather than reject the payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Swap {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: SwapStatus,
    pub created_date: Option<String>,
    pub source_exchange: Option<String>,
    pub source_network: Option<String>,
    pub destination_exchange: Option<String>,
    pub destination_network: Option<String>,
    pub destination_address: Option<String>,
    pub requested_amount: Option<f64>,
    pub input_transaction: Option<Transaction>,
    pub output_transaction: Option<Transaction>,
    pub fee: Option<f64>,
}

/// One side of a swap. A side names either an exchange or a network, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapEndpoint<'a> {
    Exchange(&'a str),
    Network(&'a str),
}

impl<'a> SwapEndpoint<'a> {
    // An empty code counts as absent, and an exchange takes precedence over a network.
    fn pick(exchange: Option<&'a str>, network: Option<&'a str>) -> Option<Self> {
        match (non_empty(exchange), non_empty(network)) {
            (Some(exchange), _) => Some(SwapEndpoint::Exchange(exchange)),
            (None, Some(network)) => Some(SwapEndpoint::Network(network)),
            (None, None) => None,
        }
    }

    pub fn code(&self) -> &'a str {
        match self {
            SwapEndpoint::Exchange(code) | SwapEndpoint::Network(code) => code,
        }
    }

    pub fn category(&self) -> EndpointCategory {
        match self {
            SwapEndpoint::Exchange(_) => EndpointCategory::Exchanges,
            SwapEndpoint::Network(_) => EndpointCategory::Networks,
        }
    }

    pub fn is_exchange(&self) -> bool {
        matches!(self, SwapEndpoint::Exchange(_))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

impl Swap {
    pub fn source(&self) -> Option<SwapEndpoint<'_>> {
        SwapEndpoint::pick(
            self.source_exchange.as_deref(),
            self.source_network.as_deref(),
        )
    }

    pub fn destination(&self) -> Option<SwapEndpoint<'_>> {
        SwapEndpoint::pick(
            self.destination_exchange.as_deref(),
            self.destination_network.as_deref(),
        )
    }

    pub fn source_network(&self) -> Option<&str> {
        non_empty(self.source_network.as_deref())
    }

    pub fn destination_network(&self) -> Option<&str> {
        non_empty(self.destination_network.as_deref())
    }

    pub fn input_amount(&self) -> Option<f64> {
        self.input_transaction.as_ref().and_then(|tx| tx.amount)
    }

    pub fn output_amount(&self) -> Option<f64> {
        self.output_transaction.as_ref().and_then(|tx| tx.amount)
    }

    /// Parses `created_date`. The API sometimes omits the offset, in which case UTC is assumed.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_date.as_deref()?;

        DateTime::parse_from_rfc3339(raw)
            .map(|date| date.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|date| date.and_utc())
            })
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_from(json: serde_json::Value) -> Swap {
        serde_json::from_value(json).expect("valid swap json")
    }

    #[test]
    fn deserializes_a_completed_swap() {
        let swap = swap_from(serde_json::json!({
            "id": "c2a7d8a1-58f2-4b1c-9d1e-7a8f5b3e9f10",
            "status": "completed",
            "created_date": "2022-10-11T12:34:56.789Z",
            "source_exchange": "BINANCE",
            "destination_network": "ARBITRUM_MAINNET",
            "destination_address": "0x5da5c2a98e26fd28914b91212b1232d58eb9bbab",
            "input_transaction": { "amount": 12.5, "transaction_id": "in-1" },
            "output_transaction": { "amount": 11.75 },
            "fee": 0.75,
            "unexpected_field": true
        }));

        assert_eq!(swap.status, SwapStatus::Completed);
        assert_eq!(swap.source(), Some(SwapEndpoint::Exchange("BINANCE")));
        assert_eq!(
            swap.destination(),
            Some(SwapEndpoint::Network("ARBITRUM_MAINNET"))
        );
        assert_eq!(swap.input_amount(), Some(12.5));
        assert_eq!(swap.output_amount(), Some(11.75));
        assert_eq!(swap.fee, Some(0.75));
    }

    #[test]
    fn unknown_status_does_not_reject_the_payload() {
        let swap = swap_from(serde_json::json!({ "id": "x", "status": "user_transfer_pending" }));
        assert_eq!(swap.status, SwapStatus::Unknown);
        assert!(!swap.status.is_completed());
    }

    #[test]
    fn empty_exchange_code_falls_back_to_network() {
        let swap = swap_from(serde_json::json!({
            "id": "x",
            "source_exchange": "",
            "source_network": "ETHEREUM_MAINNET",
        }));
        assert_eq!(swap.source(), Some(SwapEndpoint::Network("ETHEREUM_MAINNET")));
        assert_eq!(swap.destination(), None);
    }

    #[test]
    fn exchange_wins_when_both_codes_are_present() {
        let swap = Swap {
            destination_exchange: Some("COINBASE".into()),
            destination_network: Some("OPTIMISM_MAINNET".into()),
            ..Default::default()
        };
        let destination = swap.destination().expect("destination");
        assert!(destination.is_exchange());
        assert_eq!(destination.code(), "COINBASE");
        assert_eq!(destination.category(), EndpointCategory::Exchanges);
    }

    #[test]
    fn missing_transactions_yield_no_amounts() {
        let swap = swap_from(serde_json::json!({ "id": "x", "input_transaction": null }));
        assert_eq!(swap.input_amount(), None);
        assert_eq!(swap.output_amount(), None);
    }

    #[test]
    fn created_at_accepts_offsets_and_naive_timestamps() {
        let with_offset = Swap {
            created_date: Some("2022-10-11T12:34:56+02:00".into()),
            ..Default::default()
        };
        let naive = Swap {
            created_date: Some("2022-10-11T10:34:56.123456".into()),
            ..Default::default()
        };
        let garbage = Swap {
            created_date: Some("yesterday".into()),
            ..Default::default()
        };

        let expected = DateTime::parse_from_rfc3339("2022-10-11T10:34:56Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(with_offset.created_at(), Some(expected));
        assert_eq!(
            naive.created_at().map(|date| date.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(garbage.created_at(), None);
    }
}
