use super::Level;
use crate::itemset::{Item, Itemset, SupportCount, Transaction};
use fnv::FnvHashMap;

/// Result of the seeding pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedLevel {
    /// L1: singletons meeting the support threshold
    pub frequent: Level,
    /// Distinct items observed, i.e. the size of C1
    pub distinct_items: usize,
}

/// Finds the frequent 1-itemsets
///
/// Counts every item occurrence across all transactions (an item counts at
/// most once per transaction, since transactions are sets) and keeps the
/// items whose count reaches `min_support`.
///
/// # Example
/// ```
/// use apriori_miner::itemset::Itemset;
/// use apriori_miner::mining::frequent_singletons;
///
/// let transactions = vec![Itemset::from([1, 2]), Itemset::from([1])];
/// let seed = frequent_singletons(&transactions, 2);
///
/// assert_eq!(seed.distinct_items, 2);
/// assert_eq!(seed.frequent.get(&Itemset::singleton(1)), Some(&2));
/// assert!(!seed.frequent.contains_key(&Itemset::singleton(2)));
/// ```
pub fn frequent_singletons(transactions: &[Transaction], min_support: SupportCount) -> SeedLevel {
    let mut item_count: FnvHashMap<Item, SupportCount> = FnvHashMap::default();

    for transaction in transactions {
        for item in transaction.iter() {
            *item_count.entry(item).or_insert(0) += 1;
        }
    }

    let distinct_items = item_count.len();
    let frequent: Level = item_count
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .map(|(item, count)| (Itemset::singleton(item), count))
        .collect();

    tracing::trace!(
        distinct_items,
        frequent = frequent.len(),
        "seeded frequent 1-itemsets"
    );

    SeedLevel {
        frequent,
        distinct_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_item_once_per_transaction() {
        let transactions = vec![
            Itemset::from([1, 2, 3]),
            Itemset::from([1, 2]),
            Itemset::from([1, 3]),
            Itemset::from([2, 3]),
        ];

        let seed = frequent_singletons(&transactions, 2);

        assert_eq!(seed.distinct_items, 3);
        assert_eq!(seed.frequent.len(), 3);
        for item in 1..=3 {
            assert_eq!(seed.frequent.get(&Itemset::singleton(item)), Some(&3));
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let transactions = vec![Itemset::from([1]), Itemset::from([1, 2])];

        let seed = frequent_singletons(&transactions, 2);

        assert_eq!(seed.frequent.len(), 1);
        assert_eq!(seed.frequent.get(&Itemset::singleton(1)), Some(&2));
    }

    #[test]
    fn test_empty_transactions_yield_empty_level() {
        let seed = frequent_singletons(&[], 1);
        assert!(seed.frequent.is_empty());
        assert_eq!(seed.distinct_items, 0);
    }

    #[test]
    fn test_empty_transaction_contributes_nothing() {
        let transactions = vec![Itemset::default(), Itemset::from([4])];
        let seed = frequent_singletons(&transactions, 1);
        assert_eq!(seed.frequent.len(), 1);
    }
}
