//! Itemsets and transactions
//!
//! An [`Itemset`] is stored as a strictly ascending `Vec<Item>`. That sorted
//! form is the one canonical order used everywhere in the engine: derived
//! `Eq`/`Hash` make structurally equal sets collapse to one map key, and the
//! derived `Ord` (lexicographic over the sorted items) is the total order the
//! candidate join relies on.

use serde::Serialize;
use std::fmt;

/// Opaque, totally ordered item identifier
pub type Item = u32;

/// Number of transactions that contain an itemset
pub type SupportCount = usize;

/// One observed record. Duplicates collapse on construction.
pub type Transaction = Itemset;

/// Immutable set of items in canonical (ascending) order
///
/// The empty set (`Itemset::default()`) is valid as a [`Transaction`] with no
/// items. It is never produced as a frequent itemset, and
/// [`maximal_itemsets`](crate::mining::maximal_itemsets) ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct Itemset(Vec<Item>);

impl Itemset {
    /// Build an itemset from items in any order; duplicates are dropped
    ///
    /// # Example
    /// ```
    /// use apriori_miner::itemset::Itemset;
    ///
    /// let a = Itemset::new([3, 1, 2, 1]);
    /// let b = Itemset::new([1, 2, 3]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.items(), &[1, 2, 3]);
    /// ```
    pub fn new<I: IntoIterator<Item = Item>>(items: I) -> Self {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Single-item set
    pub fn singleton(item: Item) -> Self {
        Self(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in canonical order
    pub fn items(&self) -> &[Item] {
        &self.0
    }

    /// Iterate items in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// First `k` items in canonical order (fewer if the set is smaller)
    pub fn prefix(&self, k: usize) -> &[Item] {
        &self.0[..k.min(self.0.len())]
    }

    /// Largest item
    pub fn last(&self) -> Option<Item> {
        self.0.last().copied()
    }

    /// True when every item of `self` is also in `other`
    ///
    /// Both sides are sorted, so this is a single merge walk.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        if self.len() > other.len() {
            return false;
        }

        let mut theirs = other.0.iter();
        'outer: for mine in &self.0 {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Proper subset: subset and strictly smaller
    pub fn is_proper_subset_of(&self, other: &Itemset) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Set union, kept in canonical order
    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);

        while i < self.0.len() && j < other.0.len() {
            let (a, b) = (self.0[i], other.0[j]);
            if a < b {
                merged.push(a);
                i += 1;
            } else if b < a {
                merged.push(b);
                j += 1;
            } else {
                merged.push(a);
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&self.0[i..]);
        merged.extend_from_slice(&other.0[j..]);

        Itemset(merged)
    }

    /// Copy of this set with the item at canonical position `index` removed
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub(crate) fn without(&self, index: usize) -> Itemset {
        let mut items = self.0.clone();
        items.remove(index);
        Itemset(items)
    }

    /// All subsets with exactly one item removed, in canonical position order
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.len()).map(move |index| self.without(index))
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Itemset::new(iter)
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Itemset::new(items)
    }
}

impl<const N: usize> From<[Item; N]> for Itemset {
    fn from(items: [Item; N]) -> Self {
        Itemset::new(items)
    }
}

/// Renders as `{1,2,3}`
impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}
