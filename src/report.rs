//! Mining report
//!
//! Runs the engine once, times it, and keeps everything the output
//! formatters need: the ordered maximal itemsets with their support, the
//! per-level statistics, and the wall-clock runtime.

use crate::itemset::{Itemset, SupportCount, Transaction};
use crate::mining::{maximal_itemsets, mine_frequent_itemsets, LevelStats};
use std::time::{Duration, Instant};

/// A maximal itemset together with its support count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaximalItemset {
    pub itemset: Itemset,
    pub support: SupportCount,
}

/// Everything produced by one mining run
#[derive(Debug, Clone)]
pub struct MiningReport {
    /// Name of the input, as shown to the user
    pub input: String,
    pub min_support: SupportCount,
    pub transaction_count: usize,
    /// Total frequent itemsets across all levels
    pub frequent_count: usize,
    /// Maximal itemsets, ascending by size then item order
    pub maximal: Vec<MaximalItemset>,
    pub levels: Vec<LevelStats>,
    /// Mining plus maximal extraction
    pub runtime: Duration,
}

impl MiningReport {
    /// Mine `transactions` and collect the report
    pub fn generate(
        input: impl Into<String>,
        transactions: &[Transaction],
        min_support: SupportCount,
    ) -> Self {
        let start = Instant::now();

        let frequent = mine_frequent_itemsets(transactions, min_support);
        let maximal = maximal_itemsets(&frequent.itemsets())
            .into_iter()
            .map(|itemset| {
                // every maximal itemset came out of `frequent`
                let support = frequent.support(&itemset).unwrap_or_default();
                MaximalItemset { itemset, support }
            })
            .collect();

        let runtime = start.elapsed();

        Self {
            input: input.into(),
            min_support,
            transaction_count: frequent.transaction_count(),
            frequent_count: frequent.len(),
            maximal,
            levels: frequent.level_stats().to_vec(),
            runtime,
        }
    }

    /// Maximal itemsets without their supports
    pub fn maximal_itemsets(&self) -> Vec<Itemset> {
        self.maximal.iter().map(|m| m.itemset.clone()).collect()
    }

    /// Runtime in seconds, rounded to microseconds
    pub fn runtime_secs(&self) -> f64 {
        (self.runtime.as_secs_f64() * 1_000_000.0).round() / 1_000_000.0
    }
}
