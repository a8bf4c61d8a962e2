// Scenario tests for the full mining pipeline
//
// Each scenario runs seed -> levels -> maximal extraction end to end on a
// small hand-checked dataset.

use super::*;
use crate::itemset::Transaction;

fn transactions(rows: &[&[u32]]) -> Vec<Transaction> {
    rows.iter()
        .map(|row| Itemset::new(row.iter().copied()))
        .collect()
}

fn sets(rows: &[&[u32]]) -> Vec<Itemset> {
    transactions(rows)
}

/// Three items, every pair co-occurring twice, the triple only once
#[test]
fn test_pairwise_frequent_triple_infrequent() {
    let data = transactions(&[&[1, 2, 3], &[1, 2], &[1, 3], &[2, 3]]);

    let frequent = mine_frequent_itemsets(&data, 2);

    let l1 = frequent.level(1).unwrap();
    assert_eq!(l1.keys().cloned().collect::<Vec<_>>(), sets(&[&[1], &[2], &[3]]));
    assert!(l1.values().all(|&support| support == 3));

    let l2 = frequent.level(2).unwrap();
    assert_eq!(
        l2.keys().cloned().collect::<Vec<_>>(),
        sets(&[&[1, 2], &[1, 3], &[2, 3]])
    );
    assert!(l2.values().all(|&support| support == 2));

    assert!(frequent.level(3).is_none());

    let maximal = maximal_itemsets(&frequent.itemsets());
    assert_eq!(maximal, sets(&[&[1, 2], &[1, 3], &[2, 3]]));
}

/// Disjoint singleton transactions: no pair survives
#[test]
fn test_disjoint_transactions() {
    let data = transactions(&[&[1], &[2], &[3]]);

    let frequent = mine_frequent_itemsets(&data, 1);

    assert_eq!(frequent.levels().len(), 1);
    assert_eq!(frequent.len(), 3);
    assert_eq!(
        maximal_itemsets(&frequent.itemsets()),
        sets(&[&[1], &[2], &[3]])
    );
}

/// Threshold above the number of transactions
#[test]
fn test_min_support_exceeds_transaction_count() {
    let data = transactions(&[&[1, 2], &[1, 2], &[2, 3]]);

    let frequent = mine_frequent_itemsets(&data, 4);

    assert!(frequent.is_empty());
    assert!(frequent.itemsets().is_empty());
    assert!(maximal_itemsets(&frequent.itemsets()).is_empty());
}

/// A single transaction is its own unique maximal set
#[test]
fn test_single_transaction_is_maximal() {
    let data = transactions(&[&[1, 2, 3, 4]]);

    let frequent = mine_frequent_itemsets(&data, 1);

    // every non-empty subset of four items
    assert_eq!(frequent.len(), 15);
    assert_eq!(frequent.levels().len(), 4);
    assert_eq!(
        maximal_itemsets(&frequent.itemsets()),
        sets(&[&[1, 2, 3, 4]])
    );
}

#[test]
fn test_empty_transaction_list() {
    let frequent = mine_frequent_itemsets(&[], 1);
    assert!(frequent.is_empty());
    assert!(maximal_itemsets(&frequent.itemsets()).is_empty());
}

/// Classic market-basket data with mixed itemset sizes in the antichain
#[test]
fn test_mixed_size_maximal_sets() {
    let data = transactions(&[
        &[1, 3, 4],
        &[2, 3, 5],
        &[1, 2, 3, 5],
        &[2, 5],
        &[1, 2, 3, 5],
    ]);

    let frequent = mine_frequent_itemsets(&data, 2);

    assert_eq!(frequent.support(&Itemset::from([2, 3, 5])), Some(3));
    assert_eq!(frequent.support(&Itemset::from([1, 2, 3, 5])), Some(2));
    assert_eq!(frequent.support(&Itemset::from([4])), None);

    // {1,3,4} only appears once, so {1,3} is covered by {1,2,3,5}
    assert_eq!(
        maximal_itemsets(&frequent.itemsets()),
        sets(&[&[1, 2, 3, 5]])
    );
}

#[test]
fn test_antichain_with_different_sizes() {
    let data = transactions(&[&[1, 2, 3], &[1, 2, 3], &[4, 5], &[4, 5], &[6], &[6]]);

    let frequent = mine_frequent_itemsets(&data, 2);

    assert_eq!(
        maximal_itemsets(&frequent.itemsets()),
        sets(&[&[6], &[4, 5], &[1, 2, 3]])
    );
}

#[test]
fn test_duplicate_items_in_transaction_count_once() {
    let data = vec![Itemset::new([7, 7, 7]), Itemset::new([7])];

    let frequent = mine_frequent_itemsets(&data, 2);

    assert_eq!(frequent.support(&Itemset::singleton(7)), Some(2));
}

#[test]
fn test_repeated_runs_are_identical() {
    let data = transactions(&[&[3, 1, 2], &[2, 4], &[1, 2, 4], &[4, 3], &[1, 2, 3, 4]]);

    let first = mine_frequent_itemsets(&data, 2);
    let second = mine_frequent_itemsets(&data, 2);

    assert_eq!(first, second);
    assert_eq!(
        maximal_itemsets(&first.itemsets()),
        maximal_itemsets(&second.itemsets())
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let data = transactions(&[&[1, 2, 3], &[1, 2], &[2, 4], &[2, 4], &[1, 3]]);

    let frequent = mine_frequent_itemsets(&data, 2);
    let maximal = maximal_itemsets(&frequent.itemsets());

    assert_eq!(maximal_itemsets(&maximal), maximal);
}
