#![no_main]

use apriori_miner::mining::{maximal_itemsets, mine_frequent_itemsets};
use apriori_miner::transactions::parse_transactions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic; whatever parses must mine cleanly.
        // Wide rows are skipped: a single 1-support row of n items has 2^n frequent subsets.
        if let Ok(transactions) = parse_transactions(input) {
            if transactions.iter().all(|t| t.len() <= 12) {
                let frequent = mine_frequent_itemsets(&transactions, 2);
                let _ = maximal_itemsets(&frequent.itemsets());
            }
        }
    }
});
