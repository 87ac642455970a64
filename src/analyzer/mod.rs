//! Wallet analysis pipeline
//!
//! [`WalletAnalyzer::analyze`] runs one request end to end: result cache
//! lookup, concurrent upstream fan-out on a miss, then the pure
//! [`build_result`] step (two aggregation windows plus classification) and
//! the cache write-back.
//!
//! Concurrent misses for the same address are not coalesced; both compute
//! and the last write wins.

pub mod types;

pub use types::{AnalysisOutcome, AnalysisResult, RecentActivity, SampleTransfer, WalletStats};

use crate::address::Address;
use crate::cache::{CacheConfig, CacheManager, CacheStats};
use crate::config::AnalysisConfig;
use crate::errors::AnalyzerResult;
use crate::logger::{self, LogTag};
use crate::personality::{classify, ClassifierInput};
use crate::price::PriceService;
use crate::provider::{fetch_transfer_history, format_ether, TokenBalance, WalletDataProvider};
use crate::transfers::{aggregate, window_start, TransferRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Raw upstream data for one address
#[derive(Debug, Clone, Default)]
pub struct WalletSnapshot {
    pub balance_wei: u128,
    pub token_balances: Vec<TokenBalance>,
    pub transfers: Vec<TransferRecord>,
    pub eth_price: f64,
}

/// Stats for both caches owned by the analyzer
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    pub results: CacheStats,
    pub price: CacheStats,
}

pub struct WalletAnalyzer {
    provider: Arc<dyn WalletDataProvider>,
    prices: PriceService,
    results: CacheManager<Address, AnalysisResult>,
    config: AnalysisConfig,
    max_transfer_count: u32,
}

impl WalletAnalyzer {
    pub fn new(
        provider: Arc<dyn WalletDataProvider>,
        prices: PriceService,
        result_cache: CacheConfig,
        config: AnalysisConfig,
        max_transfer_count: u32,
    ) -> Self {
        Self {
            provider,
            prices,
            results: CacheManager::new(result_cache),
            config,
            max_transfer_count,
        }
    }

    pub async fn analyze(&self, address: &Address) -> AnalyzerResult<AnalysisOutcome> {
        if let Some(result) = self.results.get(address) {
            logger::debug(LogTag::Cache, &format!("Result cache hit for {}", address));
            return Ok(AnalysisOutcome {
                result,
                cached: true,
            });
        }

        let start = Instant::now();
        let snapshot = self.fetch_snapshot(address).await?;
        let result = build_result(address, &snapshot, Utc::now(), &self.config);

        logger::info(
            LogTag::Analyzer,
            &format!(
                "Analyzed {} as {} ({} transfers, {}ms)",
                address,
                result.personality,
                snapshot.transfers.len(),
                start.elapsed().as_millis()
            ),
        );

        logger::verbose(
            LogTag::Analyzer,
            &format!("Stats for {}: {:?}", address, result.stats),
        );

        self.results.insert(address.clone(), result.clone());
        Ok(AnalysisOutcome {
            result,
            cached: false,
        })
    }

    /// Balance, tokens, transfer history and price, fetched together
    ///
    /// Transfer history failures degrade to an empty list; balance and token
    /// failures abort the analysis.
    async fn fetch_snapshot(&self, address: &Address) -> AnalyzerResult<WalletSnapshot> {
        let (balance, tokens, transfers, eth_price) = tokio::join!(
            self.provider.get_balance(address),
            self.provider.get_token_balances(address),
            fetch_transfer_history(self.provider.as_ref(), address, self.max_transfer_count),
            self.prices.eth_usd(),
        );

        logger::debug(
            LogTag::Analyzer,
            &format!(
                "Fetched {} transfers for {} from {}",
                transfers.len(),
                address,
                self.provider.name()
            ),
        );

        Ok(WalletSnapshot {
            balance_wei: balance?,
            token_balances: tokens?,
            transfers,
            eth_price,
        })
    }

    /// Entries in the result cache (stale ones included until read)
    pub fn cache_size(&self) -> usize {
        self.results.len()
    }

    pub fn cache_report(&self) -> CacheReport {
        CacheReport {
            results: self.results.stats(),
            price: self.prices.cache_stats(),
        }
    }

    /// Drop every cached result and the cached price
    pub fn clear_caches(&self) {
        self.results.clear();
        self.prices.clear_cache();
        logger::info(LogTag::Cache, "Result and price caches cleared");
    }
}

/// Assemble the full result from upstream data; pure given `now`
pub fn build_result(
    address: &Address,
    snapshot: &WalletSnapshot,
    now: DateTime<Utc>,
    config: &AnalysisConfig,
) -> AnalysisResult {
    let long_start = window_start(now, config.long_window_days);
    let short_start = window_start(now, config.short_window_days);

    let long = aggregate(&snapshot.transfers, address, long_start);
    let short = aggregate(&snapshot.transfers, address, short_start);

    let eth_balance = format_ether(snapshot.balance_wei);
    let eth = eth_balance.parse::<f64>().unwrap_or(0.0);
    let portfolio_value = eth * snapshot.eth_price;
    // Every entry the provider lists counts, zero balances included
    let token_count = snapshot.token_balances.len();

    let stats = WalletStats {
        unique_contracts: long.unique_contract_count,
        erc20_count: long.fungible_transfer_count,
        nft_count: long.nft_transfer_count,
        swaps_30d: short.swap_count,
        defi_interactions: long.defi_interactions,
        nft_trades: long.nft_trades,
        total_volume: long.total_volume,
        unique_counterparties: long.unique_counterparty_count,
        meme_transfers: long.meme_transfer_count,
    };

    let classification = classify(&ClassifierInput {
        eth_balance: eth,
        token_count,
        portfolio_value,
        unique_contracts: stats.unique_contracts,
        fungible_count: stats.erc20_count,
        nft_count: stats.nft_count,
        swaps_30d: stats.swaps_30d,
        defi_interactions: stats.defi_interactions,
        nft_trades: stats.nft_trades,
    });

    let short_days = config.short_window_days.max(1) as f64;
    let recent_activity = RecentActivity {
        transfers_30d: short.transfer_count,
        transfers_90d: long.transfer_count,
        avg_daily_tx: (short.transfer_count as f64 / short_days * 10.0).round() / 10.0,
    };

    let sample_transfers = snapshot
        .transfers
        .iter()
        .filter(|t| t.is_within(long_start))
        .take(config.sample_transfer_count)
        .map(SampleTransfer::from)
        .collect();

    AnalysisResult {
        address: address.clone(),
        personality: classification.personality.to_string(),
        badges: classification.badges.iter().map(|b| b.to_string()).collect(),
        confidence: classification.confidence,
        eth_balance,
        portfolio_value: if portfolio_value.is_finite() {
            portfolio_value.round() as i64
        } else {
            0
        },
        eth_price: snapshot.eth_price,
        token_count,
        nft_count: stats.nft_count,
        stats,
        recent_activity,
        sample_transfers,
        timestamp: now.timestamp_millis(),
    }
}
