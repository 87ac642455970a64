//! Transfer record model and windowed aggregation
//!
//! Records arrive from the upstream provider already canonicalized (see
//! `provider::alchemy`) and are never mutated afterwards. Every attribute the
//! upstream may omit is an `Option`; the aggregator decides the fallback.

pub mod aggregator;

pub use aggregator::{aggregate, window_start, WindowAggregate, NATIVE_ASSET};

use crate::address::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asset class of a transfer, named after the upstream category strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferCategory {
    #[serde(rename = "external", alias = "internal")]
    Native,
    #[serde(rename = "erc20")]
    FungibleToken,
    #[serde(rename = "erc721", alias = "specialnft")]
    NftSingle,
    #[serde(rename = "erc1155")]
    NftMulti,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl TransferCategory {
    pub fn is_nft(&self) -> bool {
        matches!(self, TransferCategory::NftSingle | TransferCategory::NftMulti)
    }

    /// Upstream category names requested from the provider
    pub fn upstream_filter() -> Vec<&'static str> {
        vec!["external", "erc20", "erc721", "erc1155"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub asset: Option<String>,
    /// Decimal amount in asset units, as reported upstream
    pub value: Option<String>,
    pub category: TransferCategory,
    /// Token/NFT contract, resolved from the raw contract field first
    pub contract_address: Option<Address>,
    pub block_timestamp: Option<DateTime<Utc>>,
    pub hash: String,
    /// Hex block number as reported upstream
    pub block_number: Option<String>,
    /// Provider-assigned id, used to merge incoming/outgoing histories
    pub unique_id: Option<String>,
}

impl TransferRecord {
    /// Amount as a float; missing, non-numeric or non-finite values count as zero
    pub fn numeric_value(&self) -> f64 {
        self.value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    pub fn is_native_asset(&self) -> bool {
        self.asset
            .as_deref()
            .map(|a| a.eq_ignore_ascii_case(NATIVE_ASSET))
            .unwrap_or(false)
    }

    /// True when the record has a timestamp at or after `window_start` (unix seconds)
    pub fn is_within(&self, window_start: i64) -> bool {
        self.block_timestamp
            .map(|ts| ts.timestamp() >= window_start)
            .unwrap_or(false)
    }

    /// Either endpoint satisfies the predicate
    pub fn touches(&self, predicate: impl Fn(&Address) -> bool) -> bool {
        self.from.as_ref().map_or(false, &predicate) || self.to.as_ref().map_or(false, &predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_upstream_names() {
        let parse = |s: &str| serde_json::from_str::<TransferCategory>(&format!("\"{}\"", s)).unwrap();
        assert_eq!(parse("external"), TransferCategory::Native);
        assert_eq!(parse("internal"), TransferCategory::Native);
        assert_eq!(parse("erc20"), TransferCategory::FungibleToken);
        assert_eq!(parse("erc721"), TransferCategory::NftSingle);
        assert_eq!(parse("specialnft"), TransferCategory::NftSingle);
        assert_eq!(parse("erc1155"), TransferCategory::NftMulti);
        assert_eq!(parse("something-new"), TransferCategory::Unknown);

        assert_eq!(
            serde_json::to_string(&TransferCategory::NftMulti).unwrap(),
            "\"erc1155\""
        );
    }

    #[test]
    fn test_numeric_value_fallbacks() {
        let mut record = TransferRecord {
            from: None,
            to: None,
            asset: Some("ETH".to_string()),
            value: Some("1.25".to_string()),
            category: TransferCategory::Native,
            contract_address: None,
            block_timestamp: None,
            hash: "0xabc".to_string(),
            block_number: None,
            unique_id: None,
        };
        assert_eq!(record.numeric_value(), 1.25);

        record.value = Some("lots".to_string());
        assert_eq!(record.numeric_value(), 0.0);

        record.value = Some("NaN".to_string());
        assert_eq!(record.numeric_value(), 0.0);

        record.value = None;
        assert_eq!(record.numeric_value(), 0.0);
    }
}
