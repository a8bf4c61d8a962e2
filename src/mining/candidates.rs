use super::Level;
use crate::itemset::Itemset;
use std::collections::BTreeSet;

/// Joins two k-itemsets into a (k+1)-candidate
///
/// `a` and `b` must both have size k, agree on their first k-1 items and
/// differ in the last one. Returns `None` otherwise. Only the pair with
/// `a.last() < b.last()` is accepted, so each union is produced once.
pub fn join(a: &Itemset, b: &Itemset) -> Option<Itemset> {
    let k = a.len();
    if k == 0 || b.len() != k {
        return None;
    }

    if a.prefix(k - 1) != b.prefix(k - 1) {
        return None;
    }

    match (a.last(), b.last()) {
        (Some(x), Some(y)) if x < y => Some(a.union(b)),
        _ => None,
    }
}

/// True if some k-subset of a (k+1)-candidate is missing from L(k)
///
/// Any such candidate cannot be frequent (downward closure), so it is dropped
/// without being counted.
pub fn has_infrequent_subset(candidate: &Itemset, frequent: &Level) -> bool {
    candidate
        .immediate_subsets()
        .any(|subset| !frequent.contains_key(&subset))
}

/// Generates candidate (k+1)-itemsets from the frequent k-itemsets
///
/// Join step: L(k) is walked in canonical order and every itemset is paired
/// with the ones after it that share its (k-1)-prefix. Because the order is
/// lexicographic over sorted items, those partners are contiguous, so the
/// inner scan stops at the first prefix mismatch.
///
/// Prune step: a joined candidate survives only if all of its k-subsets are
/// in L(k).
///
/// # Example
/// ```
/// use apriori_miner::itemset::Itemset;
/// use apriori_miner::mining::{generate_candidates, Level};
///
/// let l2: Level = [([1u32, 2], 2), ([1, 3], 2), ([2, 3], 2), ([2, 4], 2)]
///     .into_iter()
///     .map(|(items, support)| (Itemset::from(items), support))
///     .collect();
///
/// let c3 = generate_candidates(&l2);
///
/// // {2,3,4} is joined but pruned: {3,4} is not frequent
/// assert_eq!(c3.into_iter().collect::<Vec<_>>(), vec![Itemset::from([1, 2, 3])]);
/// ```
pub fn generate_candidates(frequent: &Level) -> BTreeSet<Itemset> {
    let itemsets: Vec<&Itemset> = frequent.keys().collect();
    let mut candidates = BTreeSet::new();
    let mut joined = 0usize;

    for (i, a) in itemsets.iter().enumerate() {
        let k = a.len();
        for b in &itemsets[i + 1..] {
            if b.prefix(k.saturating_sub(1)) != a.prefix(k.saturating_sub(1)) {
                break;
            }

            let Some(candidate) = join(a, b) else {
                continue;
            };
            joined += 1;

            if !has_infrequent_subset(&candidate, frequent) {
                candidates.insert(candidate);
            }
        }
    }

    tracing::trace!(
        joined,
        pruned = joined - candidates.len(),
        kept = candidates.len(),
        "generated candidates"
    );

    candidates
}
