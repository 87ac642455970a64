/// Analysis result model, the unit stored in the result cache
use crate::address::Address;
use crate::transfers::{TransferCategory, TransferRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub address: Address,
    pub personality: String,
    pub badges: Vec<String>,
    pub confidence: u8,
    /// Exact decimal ether amount
    pub eth_balance: String,
    /// USD value of the native balance, rounded to whole dollars
    pub portfolio_value: i64,
    pub eth_price: f64,
    /// Tokens with a non-zero balance
    pub token_count: usize,
    /// NFT transfers in the long window
    pub nft_count: u32,
    pub stats: WalletStats,
    pub recent_activity: RecentActivity,
    pub sample_transfers: Vec<SampleTransfer>,
    /// Analysis time, unix milliseconds
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    pub unique_contracts: usize,
    pub erc20_count: u32,
    pub nft_count: u32,
    pub swaps_30d: u32,
    pub defi_interactions: u32,
    pub nft_trades: u32,
    pub total_volume: f64,
    pub unique_counterparties: usize,
    pub meme_transfers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub transfers_30d: usize,
    pub transfers_90d: usize,
    pub avg_daily_tx: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleTransfer {
    pub hash: String,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: Option<String>,
    pub asset: Option<String>,
    pub category: TransferCategory,
    pub block_num: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<&TransferRecord> for SampleTransfer {
    fn from(record: &TransferRecord) -> Self {
        Self {
            hash: record.hash.clone(),
            from: record.from.clone(),
            to: record.to.clone(),
            value: record.value.clone(),
            asset: record.asset.clone(),
            category: record.category,
            block_num: record.block_number.clone(),
            timestamp: record.block_timestamp,
        }
    }
}

/// A result plus whether it was served from the cache
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub cached: bool,
}
