/// Request and response shapes for the Alchemy JSON-RPC API
use crate::address::Address;
use crate::transfers::{TransferCategory, TransferRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// DOMAIN TYPES
// =============================================================================

/// Parameters for `alchemy_getAssetTransfers`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransferFilter {
    pub from_block: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,
    pub category: Vec<&'static str>,
    /// Hex encoded, e.g. `0x3e8`
    pub max_count: String,
    pub with_metadata: bool,
}

impl AssetTransferFilter {
    fn base(max_count: u32) -> Self {
        Self {
            from_block: "0x0".to_string(),
            from_address: None,
            to_address: None,
            category: TransferCategory::upstream_filter(),
            max_count: format!("{:#x}", max_count),
            with_metadata: true,
        }
    }

    /// Transfers received by `address`
    pub fn incoming(address: &Address, max_count: u32) -> Self {
        Self {
            to_address: Some(address.clone()),
            ..Self::base(max_count)
        }
    }

    /// Transfers sent by `address`
    pub fn outgoing(address: &Address, max_count: u32) -> Self {
        Self {
            from_address: Some(address.clone()),
            ..Self::base(max_count)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub contract_address: Address,
    /// Raw hex or decimal amount; absent when upstream failed to read it
    pub token_balance: Option<String>,
}

// =============================================================================
// JSON-RPC ENVELOPE
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenBalancesResult {
    #[serde(default)]
    pub token_balances: Vec<TokenBalance>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetTransfersResult {
    #[serde(default)]
    pub transfers: Vec<RawTransfer>,
}

// =============================================================================
// RAW TRANSFER
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawContract {
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMetadata {
    pub block_timestamp: Option<String>,
}

/// One entry of `alchemy_getAssetTransfers`, every field as loose as upstream
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTransfer {
    pub block_num: Option<String>,
    pub unique_id: Option<String>,
    #[serde(default)]
    pub hash: String,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Number in practice, tolerated as a string too
    pub value: Option<Value>,
    pub asset: Option<String>,
    pub category: Option<TransferCategory>,
    pub raw_contract: Option<RawContract>,
    pub contract_address: Option<String>,
    pub metadata: Option<RawMetadata>,
}

fn non_empty_address(raw: Option<&str>) -> Option<Address> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Address::normalized)
}

impl From<RawTransfer> for TransferRecord {
    fn from(raw: RawTransfer) -> Self {
        let value = match raw.value {
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        let contract_address = non_empty_address(
            raw.raw_contract
                .as_ref()
                .and_then(|c| c.address.as_deref()),
        )
        .or_else(|| non_empty_address(raw.contract_address.as_deref()));

        let block_timestamp = raw
            .metadata
            .and_then(|m| m.block_timestamp)
            .and_then(|ts| DateTime::parse_from_rfc3339(&ts).ok())
            .map(|ts| ts.with_timezone(&Utc));

        TransferRecord {
            from: non_empty_address(raw.from.as_deref()),
            to: non_empty_address(raw.to.as_deref()),
            asset: raw.asset,
            value,
            category: raw.category.unwrap_or(TransferCategory::Unknown),
            contract_address,
            block_timestamp,
            hash: raw.hash,
            block_number: raw.block_num,
            unique_id: raw.unique_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_wire_shape() {
        let address = Address::normalized("0x00000000000000000000000000000000000000AA");
        let filter = AssetTransferFilter::incoming(&address, 1000);
        let wire = serde_json::to_value(&filter).unwrap();

        assert_eq!(
            wire,
            json!({
                "fromBlock": "0x0",
                "toAddress": "0x00000000000000000000000000000000000000aa",
                "category": ["external", "erc20", "erc721", "erc1155"],
                "maxCount": "0x3e8",
                "withMetadata": true
            })
        );
        assert!(AssetTransferFilter::outgoing(&address, 1000).to_address.is_none());
    }

    #[test]
    fn test_raw_transfer_conversion() {
        let raw: RawTransfer = serde_json::from_value(json!({
            "blockNum": "0x10d4f",
            "uniqueId": "0xabc:log:3",
            "hash": "0xabc",
            "from": "0x7A250D5630B4CF539739DF2C5DACB4C659F2488D",
            "to": "0x00000000000000000000000000000000000000aa",
            "value": 0.5,
            "asset": "ETH",
            "category": "external",
            "rawContract": { "address": null, "value": "0x6f05b59d3b20000", "decimal": "0x12" },
            "metadata": { "blockTimestamp": "2024-05-20T08:15:30.000Z" }
        }))
        .unwrap();

        let record = TransferRecord::from(raw);
        assert_eq!(record.value.as_deref(), Some("0.5"));
        assert_eq!(record.category, TransferCategory::Native);
        assert_eq!(record.contract_address, None);
        assert_eq!(
            record.from,
            Some(Address::normalized("0x7a250d5630b4cf539739df2c5dacb4c659f2488d"))
        );
        assert_eq!(
            record.block_timestamp.map(|ts| ts.timestamp()),
            Some(1716192930)
        );
        assert_eq!(record.unique_id.as_deref(), Some("0xabc:log:3"));
    }

    #[test]
    fn test_raw_transfer_missing_fields() {
        let raw: RawTransfer = serde_json::from_value(json!({
            "hash": "0xdef",
            "from": "",
            "category": "erc721",
            "contractAddress": "0x7BE8076F4EA4A4AD08075C2508E481D6C946D12B",
            "metadata": { "blockTimestamp": "not a date" }
        }))
        .unwrap();

        let record = TransferRecord::from(raw);
        assert_eq!(record.from, None);
        assert_eq!(record.to, None);
        assert_eq!(record.value, None);
        assert_eq!(record.block_timestamp, None);
        assert_eq!(record.category, TransferCategory::NftSingle);
        assert_eq!(
            record.contract_address,
            Some(Address::normalized("0x7be8076f4ea4a4ad08075c2508e481d6c946d12b"))
        );
    }
}
