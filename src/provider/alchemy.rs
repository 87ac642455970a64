/// Alchemy JSON-RPC client
///
/// API Documentation: https://docs.alchemy.com/reference/api-overview
///
/// Methods used:
/// 1. eth_getBalance - native balance in wei
/// 2. alchemy_getTokenBalances - ERC-20 balances held by an address
/// 3. alchemy_getAssetTransfers - transfer history with block metadata
use super::types::{
    AssetTransferFilter, AssetTransfersResult, RpcRequest, RpcResponse, TokenBalance,
    TokenBalancesResult,
};
use super::WalletDataProvider;
use crate::address::Address;
use crate::config::ProviderConfig;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::logger::{self, LogTag};
use crate::transfers::TransferRecord;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct AlchemyProvider {
    client: Client,
    endpoint: String,
}

impl AlchemyProvider {
    pub fn new(config: &ProviderConfig) -> AnalyzerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        if config.api_key.is_empty() {
            logger::warning(
                LogTag::Provider,
                "No Alchemy API key configured (set ALCHEMY_API_KEY); upstream calls will fail",
            );
        }

        let endpoint = if config.api_key.is_empty() {
            config.rpc_url.trim_end_matches('/').to_string()
        } else {
            format!("{}/{}", config.rpc_url.trim_end_matches('/'), config.api_key)
        };

        Ok(Self { client, endpoint })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> AnalyzerResult<T> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&RpcRequest::new(method, params))
            .send()
            .await
            .map_err(|e| AnalyzerError::upstream(method, e))?;

        if !response.status().is_success() {
            return Err(AnalyzerError::upstream(
                method,
                format!("HTTP {}", response.status()),
            ));
        }

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| AnalyzerError::upstream(method, format!("invalid response: {}", e)))?;

        logger::debug(
            LogTag::Provider,
            &format!("{} completed in {}ms", method, start.elapsed().as_millis()),
        );

        if let Some(error) = body.error {
            return Err(AnalyzerError::upstream(
                method,
                format!("RPC error {}: {}", error.code, error.message),
            ));
        }

        body.result
            .ok_or_else(|| AnalyzerError::upstream(method, "response had no result"))
    }
}

#[async_trait]
impl WalletDataProvider for AlchemyProvider {
    fn name(&self) -> &'static str {
        "alchemy"
    }

    async fn get_balance(&self, address: &Address) -> AnalyzerResult<u128> {
        let raw: String = self
            .call("eth_getBalance", json!([address, "latest"]))
            .await?;
        parse_hex_quantity(&raw)
    }

    async fn get_token_balances(&self, address: &Address) -> AnalyzerResult<Vec<TokenBalance>> {
        let result: TokenBalancesResult = self
            .call("alchemy_getTokenBalances", json!([address]))
            .await?;
        Ok(result.token_balances)
    }

    async fn get_asset_transfers(
        &self,
        filter: &AssetTransferFilter,
    ) -> AnalyzerResult<Vec<TransferRecord>> {
        let result: AssetTransfersResult = self
            .call("alchemy_getAssetTransfers", json!([filter]))
            .await?;

        logger::debug(
            LogTag::Provider,
            &format!("alchemy_getAssetTransfers returned {} records", result.transfers.len()),
        );

        Ok(result
            .transfers
            .into_iter()
            .map(TransferRecord::from)
            .collect())
    }
}

// ============================================================================
// QUANTITY HELPERS
// ============================================================================

/// Parse a `0x`-prefixed JSON-RPC quantity
pub fn parse_hex_quantity(raw: &str) -> AnalyzerResult<u128> {
    let digits = raw
        .trim()
        .strip_prefix("0x")
        .ok_or_else(|| AnalyzerError::Parse(format!("quantity without 0x prefix: {}", raw)))?;

    if digits.is_empty() {
        return Ok(0);
    }

    u128::from_str_radix(digits, 16)
        .map_err(|e| AnalyzerError::Parse(format!("invalid quantity {}: {}", raw, e)))
}

/// Exact decimal ether string for a wei amount (`0.0`, `1.5`, `12.000000000000000001`)
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let fraction = wei % WEI_PER_ETHER;

    let fraction = format!("{:018}", fraction);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0x").unwrap(), 0);
        assert_eq!(
            parse_hex_quantity("0x14d1120d7b160000").unwrap(),
            1_500_000_000_000_000_000
        );
        assert!(matches!(
            parse_hex_quantity("1234"),
            Err(AnalyzerError::Parse(_))
        ));
        assert!(matches!(
            parse_hex_quantity("0xzz"),
            Err(AnalyzerError::Parse(_))
        ));
    }

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(0), "0.0");
        assert_eq!(format_ether(WEI_PER_ETHER), "1.0");
        assert_eq!(format_ether(1_500_000_000_000_000_000), "1.5");
        assert_eq!(format_ether(1), "0.000000000000000001");
        assert_eq!(format_ether(12 * WEI_PER_ETHER + 1), "12.000000000000000001");
        assert_eq!(format_ether(50_000_000_000_000_000), "0.05");
    }

    #[test]
    fn test_endpoint_includes_key() {
        let config = ProviderConfig {
            rpc_url: "https://eth-mainnet.g.alchemy.com/v2/".to_string(),
            api_key: "demo".to_string(),
            ..ProviderConfig::default()
        };
        let provider = AlchemyProvider::new(&config).unwrap();
        assert_eq!(provider.endpoint, "https://eth-mainnet.g.alchemy.com/v2/demo");
    }
}
