use super::Level;
use crate::itemset::{Itemset, SupportCount, Transaction};
use std::collections::{BTreeMap, BTreeSet};

/// Counts, for every candidate, the transactions that contain it
///
/// Every candidate appears in the result, with 0 when nothing contains it
/// (including candidates larger than any transaction). Transactions are the
/// outer loop so the input is read in its original order exactly once.
pub fn count_support(
    transactions: &[Transaction],
    candidates: &BTreeSet<Itemset>,
) -> BTreeMap<Itemset, SupportCount> {
    let mut counts: BTreeMap<Itemset, SupportCount> =
        candidates.iter().map(|c| (c.clone(), 0)).collect();

    for transaction in transactions {
        for (candidate, count) in counts.iter_mut() {
            if candidate.is_subset_of(transaction) {
                *count += 1;
            }
        }
    }

    counts
}

/// Keeps the counted candidates whose support reaches `min_support`
pub fn filter_frequent(
    counts: BTreeMap<Itemset, SupportCount>,
    min_support: SupportCount,
) -> Level {
    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .collect()
}
