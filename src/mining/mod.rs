// Level-wise Apriori Mining of Frequent and Maximal Itemsets
//
// Pipeline, driven top-down by `mine_frequent_itemsets`:
//   seed (L1) -> generate candidates C(k+1) -> count support -> filter -> L(k+1)
// repeated until a level comes back empty. The accumulated levels then feed
// `maximal_itemsets`, which keeps only the antichain of sets that have no
// frequent proper superset.
//
// Scientific Foundation:
// [1] Agrawal, R., & Srikant, R. (1994). Fast algorithms for mining
//     association rules. VLDB. Join/prune candidate generation and the
//     downward-closure property every level relies on.
//
// Every structure here lives for exactly one run. Levels are built, filtered,
// handed to the next stage and never mutated afterwards.

mod candidates;
mod driver;
mod maximal;
mod seed;
mod support;

use crate::itemset::{Itemset, SupportCount};
use std::collections::BTreeMap;

pub use candidates::{generate_candidates, has_infrequent_subset, join};
pub use driver::{mine_frequent_itemsets, FrequentItemsets, LevelStats};
pub use maximal::{maximal_itemsets, presentation_order};
pub use seed::{frequent_singletons, SeedLevel};
pub use support::{count_support, filter_frequent};

/// Frequent itemsets of one size, keyed in canonical order, with their support
pub type Level = BTreeMap<Itemset, SupportCount>;

#[cfg(test)]
mod tests;
