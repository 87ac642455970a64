/// Time-windowed aggregation of a wallet's transfer history
///
/// [`aggregate`] is a pure function of its inputs: it never consults a
/// clock, never mutates the records or the known-entity tables, and its
/// output does not depend on the order of the input list.
use super::{TransferCategory, TransferRecord};
use crate::address::Address;
use crate::known_entities;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Symbol of the network's native asset; only these transfers count as volume
pub const NATIVE_ASSET: &str = "ETH";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Statistics for one trailing window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowAggregate {
    pub defi_interactions: u32,
    pub nft_trades: u32,
    pub total_volume: f64,
    pub unique_counterparty_count: usize,
    pub unique_contract_count: usize,
    pub fungible_transfer_count: u32,
    pub nft_transfer_count: u32,
    pub swap_count: u32,
    /// Transfers of a known meme token
    pub meme_transfer_count: u32,
    /// Records that fell inside the window
    pub transfer_count: usize,
}

/// Unix timestamp `days` before `now`
pub fn window_start(now: DateTime<Utc>, days: i64) -> i64 {
    now.timestamp() - days * SECONDS_PER_DAY
}

pub fn aggregate(
    transfers: &[TransferRecord],
    subject: &Address,
    window_start: i64,
) -> WindowAggregate {
    let mut result = WindowAggregate::default();
    let mut counterparties: HashSet<&Address> = HashSet::new();
    let mut contracts: HashSet<&Address> = HashSet::new();
    let mut native_values: Vec<f64> = Vec::new();

    for transfer in transfers.iter().filter(|t| t.is_within(window_start)) {
        result.transfer_count += 1;

        let from = transfer.from.as_ref();
        let to = transfer.to.as_ref();

        if from == Some(subject) {
            if let Some(to) = to.filter(|to| *to != subject) {
                counterparties.insert(to);
            }
        }
        if to == Some(subject) {
            if let Some(from) = from.filter(|from| *from != subject) {
                counterparties.insert(from);
            }
        }

        if let Some(contract) = transfer.contract_address.as_ref() {
            contracts.insert(contract);
            if known_entities::is_meme_token(contract) {
                result.meme_transfer_count += 1;
            }
        }

        // Routers are matched on endpoints, protocols on the token contract
        let protocol_contract = transfer
            .contract_address
            .as_ref()
            .map_or(false, known_entities::is_defi_protocol);
        if protocol_contract || transfer.touches(known_entities::is_dex_router) {
            result.defi_interactions += 1;
        }

        if transfer.category.is_nft() {
            result.nft_transfer_count += 1;
            if transfer.touches(known_entities::is_nft_marketplace) {
                result.nft_trades += 1;
            }
        }

        if transfer.category == TransferCategory::FungibleToken {
            result.fungible_transfer_count += 1;
        }

        let router_contract = transfer
            .contract_address
            .as_ref()
            .map_or(false, known_entities::is_dex_router);
        if router_contract || transfer.touches(known_entities::is_dex_router) {
            result.swap_count += 1;
        }

        if transfer.is_native_asset() {
            native_values.push(transfer.numeric_value());
        }
    }

    // Summed in sorted order so the float total is independent of input order
    native_values.sort_by(f64::total_cmp);
    result.total_volume = native_values.iter().sum();
    result.unique_counterparty_count = counterparties.len();
    result.unique_contract_count = contracts.len();

    result
}
