//! Upstream wallet data
//!
//! [`WalletDataProvider`] is the seam between the pipeline and the chain
//! indexer. Production uses [`AlchemyProvider`]; tests substitute an
//! in-memory implementation.

pub mod alchemy;
pub mod types;

pub use alchemy::{format_ether, parse_hex_quantity, AlchemyProvider};
pub use types::{AssetTransferFilter, TokenBalance};

use crate::address::Address;
use crate::errors::AnalyzerResult;
use crate::logger::{self, LogTag};
use crate::transfers::TransferRecord;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait WalletDataProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Native balance in wei
    async fn get_balance(&self, address: &Address) -> AnalyzerResult<u128>;

    async fn get_token_balances(&self, address: &Address) -> AnalyzerResult<Vec<TokenBalance>>;

    async fn get_asset_transfers(
        &self,
        filter: &AssetTransferFilter,
    ) -> AnalyzerResult<Vec<TransferRecord>>;
}

/// Incoming and outgoing history merged into one list
///
/// Each direction is fetched independently; a failed direction is logged and
/// treated as empty. Records present in both directions (self-transfers) are
/// kept once, keyed by the upstream unique id. Incoming records come first.
pub async fn fetch_transfer_history(
    provider: &dyn WalletDataProvider,
    address: &Address,
    max_count: u32,
) -> Vec<TransferRecord> {
    let incoming_filter = AssetTransferFilter::incoming(address, max_count);
    let outgoing_filter = AssetTransferFilter::outgoing(address, max_count);

    let (incoming, outgoing) = tokio::join!(
        provider.get_asset_transfers(&incoming_filter),
        provider.get_asset_transfers(&outgoing_filter),
    );

    let incoming = incoming.unwrap_or_else(|e| {
        logger::warning(
            LogTag::Provider,
            &format!("Incoming transfers for {} unavailable: {}", address, e),
        );
        Vec::new()
    });
    let outgoing = outgoing.unwrap_or_else(|e| {
        logger::warning(
            LogTag::Provider,
            &format!("Outgoing transfers for {} unavailable: {}", address, e),
        );
        Vec::new()
    });

    merge_transfer_lists(incoming, outgoing)
}

/// Concatenate, dropping records whose unique id was already seen
pub fn merge_transfer_lists(
    incoming: Vec<TransferRecord>,
    outgoing: Vec<TransferRecord>,
) -> Vec<TransferRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    incoming
        .into_iter()
        .chain(outgoing)
        .filter(|record| match &record.unique_id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}
