//! JSON output format for mining reports

use crate::itemset::{Item, SupportCount};
use crate::mining::LevelStats;
use crate::report::MiningReport;
use serde::{Deserialize, Serialize};

/// A maximal itemset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonItemset {
    /// Items in ascending order
    pub items: Vec<Item>,
    /// Number of transactions containing all items
    pub support: SupportCount,
}

/// Counting statistics for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLevel {
    pub size: usize,
    pub candidates: usize,
    pub frequent: usize,
}

impl From<&LevelStats> for JsonLevel {
    fn from(stats: &LevelStats) -> Self {
        Self {
            size: stats.size,
            candidates: stats.candidates,
            frequent: stats.frequent,
        }
    }
}

/// Summary of the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub transactions: usize,
    /// Frequent itemsets across all levels
    pub frequent_itemsets: usize,
    /// Number of maximal itemsets
    pub total_items: usize,
    pub runtime_secs: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub input_file: String,
    pub min_support: SupportCount,
    /// Maximal itemsets, ascending by size then item order
    pub maximal_itemsets: Vec<JsonItemset>,
    pub summary: JsonSummary,
    /// Per-level statistics (if --levels enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<JsonLevel>>,
}

impl JsonOutput {
    /// Build the JSON structure from a report
    pub fn from_report(report: &MiningReport, show_levels: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "apriori-miner-json-v1".to_string(),
            input_file: report.input.clone(),
            min_support: report.min_support,
            maximal_itemsets: report
                .maximal
                .iter()
                .map(|m| JsonItemset {
                    items: m.itemset.items().to_vec(),
                    support: m.support,
                })
                .collect(),
            summary: JsonSummary {
                transactions: report.transaction_count,
                frequent_itemsets: report.frequent_count,
                total_items: report.maximal.len(),
                runtime_secs: report.runtime_secs(),
            },
            levels: show_levels.then(|| report.levels.iter().map(JsonLevel::from).collect()),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemset::Itemset;

    fn report() -> MiningReport {
        let transactions = vec![
            Itemset::from([1, 2, 3]),
            Itemset::from([1, 2]),
            Itemset::from([1, 3]),
            Itemset::from([2, 3]),
        ];
        MiningReport::generate("basket.csv", &transactions, 2)
    }

    #[test]
    fn test_json_structure() {
        let output = JsonOutput::from_report(&report(), false);

        assert_eq!(output.format, "apriori-miner-json-v1");
        assert_eq!(output.input_file, "basket.csv");
        assert_eq!(output.maximal_itemsets.len(), 3);
        assert_eq!(output.maximal_itemsets[0].items, vec![1, 2]);
        assert_eq!(output.maximal_itemsets[0].support, 2);
        assert_eq!(output.summary.total_items, 3);
        assert_eq!(output.summary.frequent_itemsets, 6);
        assert!(output.levels.is_none());
    }

    #[test]
    fn test_json_levels_skipped_when_disabled() {
        let json = JsonOutput::from_report(&report(), false).to_json().unwrap();
        assert!(!json.contains("\"levels\""));
    }

    #[test]
    fn test_json_parses_back() {
        let json = JsonOutput::from_report(&report(), true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["min_support"], 2);
        assert_eq!(value["maximal_itemsets"][2]["items"], serde_json::json!([2, 3]));
        assert_eq!(value["levels"][2]["candidates"], 1);
        assert_eq!(value["summary"]["transactions"], 4);
    }
}
