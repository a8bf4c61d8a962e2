use super::{count_support, filter_frequent, frequent_singletons, generate_candidates, Level};
use crate::itemset::{Itemset, SupportCount, Transaction};
use std::collections::BTreeSet;

/// Counting statistics for one level of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    /// Itemset size k
    pub size: usize,
    /// Candidates whose support was counted at this size
    pub candidates: usize,
    /// Candidates that met the threshold
    pub frequent: usize,
}

/// Every frequent itemset found by one mining run, grouped by size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets {
    levels: Vec<Level>,
    stats: Vec<LevelStats>,
    min_support: SupportCount,
    transaction_count: usize,
}

impl FrequentItemsets {
    /// Union of all levels
    pub fn itemsets(&self) -> BTreeSet<Itemset> {
        self.levels
            .iter()
            .flat_map(|level| level.keys().cloned())
            .collect()
    }

    /// Non-empty levels, `levels()[0]` being L1
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// L(k), if any itemset of size `k` is frequent
    pub fn level(&self, k: usize) -> Option<&Level> {
        k.checked_sub(1).and_then(|index| self.levels.get(index))
    }

    /// Support of a frequent itemset; `None` if it is not frequent
    pub fn support(&self, itemset: &Itemset) -> Option<SupportCount> {
        self.level(itemset.len())
            .and_then(|level| level.get(itemset))
            .copied()
    }

    /// One entry per counting round, including the final round that came back empty
    pub fn level_stats(&self) -> &[LevelStats] {
        &self.stats
    }

    /// Total number of frequent itemsets across all levels
    pub fn len(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn min_support(&self) -> SupportCount {
        self.min_support
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }
}

/// Runs Apriori over `transactions` and returns every frequent itemset
///
/// Seeds L1, then repeats candidate generation, support counting and
/// filtering until a level comes back empty. Each finalized level is kept
/// before moving on, so L1 is part of the result. The loop ends because
/// candidates grow by one item per round and the number of distinct frequent
/// items bounds their size.
///
/// `min_support` is a count of transactions and is expected to be at least 1;
/// rejecting other values is the caller's job.
///
/// # Example
/// ```
/// use apriori_miner::itemset::Itemset;
/// use apriori_miner::mining::mine_frequent_itemsets;
///
/// let transactions = vec![
///     Itemset::from([1, 2, 3]),
///     Itemset::from([1, 2]),
///     Itemset::from([1, 3]),
///     Itemset::from([2, 3]),
/// ];
///
/// let frequent = mine_frequent_itemsets(&transactions, 2);
///
/// assert_eq!(frequent.len(), 6);
/// assert_eq!(frequent.support(&Itemset::from([1, 2])), Some(2));
/// assert_eq!(frequent.support(&Itemset::from([1, 2, 3])), None);
/// ```
pub fn mine_frequent_itemsets(
    transactions: &[Transaction],
    min_support: SupportCount,
) -> FrequentItemsets {
    let mut levels: Vec<Level> = Vec::new();
    let mut stats: Vec<LevelStats> = Vec::new();

    let seed = frequent_singletons(transactions, min_support);
    stats.push(LevelStats {
        size: 1,
        candidates: seed.distinct_items,
        frequent: seed.frequent.len(),
    });

    let mut current = seed.frequent;
    while !current.is_empty() {
        let size = levels.len() + 2;
        let candidates = generate_candidates(&current);
        levels.push(current);

        if candidates.is_empty() {
            tracing::debug!(size, "no candidates left");
            break;
        }

        let counts = count_support(transactions, &candidates);
        let next = filter_frequent(counts, min_support);

        tracing::debug!(
            size,
            candidates = candidates.len(),
            frequent = next.len(),
            "counted level"
        );
        stats.push(LevelStats {
            size,
            candidates: candidates.len(),
            frequent: next.len(),
        });

        current = next;
    }

    let result = FrequentItemsets {
        levels,
        stats,
        min_support,
        transaction_count: transactions.len(),
    };

    tracing::info!(
        transactions = result.transaction_count,
        min_support,
        levels = result.levels.len(),
        frequent = result.len(),
        "mining finished"
    );

    result
}
