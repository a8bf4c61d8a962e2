use crate::itemset::Itemset;
use std::cmp::Ordering;

/// Presentation order: ascending size, then canonical item order
pub fn presentation_order(a: &Itemset, b: &Itemset) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Reduces frequent itemsets to the maximal ones
///
/// Itemsets are visited largest first (ties in canonical order), and each is
/// accepted unless it is a subset of one already accepted. An accepted set is
/// never smaller than a later one, so it can never turn out to be a subset of
/// it, and one forward pass is enough.
///
/// The result is sorted by [`presentation_order`]. Duplicates in the input
/// collapse to one entry. Empty itemsets are never frequent itemsets and are
/// skipped.
///
/// # Example
/// ```
/// use apriori_miner::itemset::Itemset;
/// use apriori_miner::mining::maximal_itemsets;
///
/// let frequent = vec![
///     Itemset::from([1]),
///     Itemset::from([2]),
///     Itemset::from([3]),
///     Itemset::from([1, 2]),
/// ];
///
/// let maximal = maximal_itemsets(&frequent);
/// assert_eq!(maximal, vec![Itemset::from([3]), Itemset::from([1, 2])]);
/// ```
pub fn maximal_itemsets<'a, I>(frequent: I) -> Vec<Itemset>
where
    I: IntoIterator<Item = &'a Itemset>,
{
    let mut by_size: Vec<&Itemset> = frequent
        .into_iter()
        .filter(|itemset| !itemset.is_empty())
        .collect();
    by_size.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    by_size.dedup();

    let mut maximal: Vec<Itemset> = Vec::new();
    for itemset in by_size {
        if !maximal.iter().any(|accepted| itemset.is_subset_of(accepted)) {
            maximal.push(itemset.clone());
        }
    }

    maximal.sort_by(presentation_order);
    maximal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_order() {
        let mut sets = vec![
            Itemset::from([1, 3]),
            Itemset::from([4]),
            Itemset::from([1, 2]),
            Itemset::from([0, 1, 2]),
        ];
        sets.sort_by(presentation_order);
        assert_eq!(
            sets,
            vec![
                Itemset::from([4]),
                Itemset::from([1, 2]),
                Itemset::from([1, 3]),
                Itemset::from([0, 1, 2]),
            ]
        );
    }

    #[test]
    fn test_subsets_of_larger_sets_are_dropped() {
        let frequent = vec![
            Itemset::from([1]),
            Itemset::from([2]),
            Itemset::from([3]),
            Itemset::from([1, 2]),
            Itemset::from([1, 3]),
            Itemset::from([2, 3]),
            Itemset::from([1, 2, 3]),
        ];

        assert_eq!(maximal_itemsets(&frequent), vec![Itemset::from([1, 2, 3])]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = vec![
            Itemset::from([1, 2]),
            Itemset::from([5]),
            Itemset::from([2, 3]),
            Itemset::from([2]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(maximal_itemsets(&forward), maximal_itemsets(&reversed));
    }

    #[test]
    fn test_duplicates_collapse() {
        let frequent = vec![Itemset::from([1, 2]), Itemset::from([2, 1])];
        assert_eq!(maximal_itemsets(&frequent), vec![Itemset::from([1, 2])]);
    }

    #[test]
    fn test_empty_itemset_skipped() {
        let frequent = vec![Itemset::default(), Itemset::from([1])];
        assert_eq!(maximal_itemsets(&frequent), vec![Itemset::from([1])]);

        assert!(maximal_itemsets(&[Itemset::default()]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let frequent: Vec<Itemset> = Vec::new();
        assert!(maximal_itemsets(&frequent).is_empty());
    }
}
