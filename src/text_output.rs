//! Plain-text report and the brace-delimited itemset notation
//!
//! `{{1,2}{3}}` lists the itemsets `{1,2}` and `{3}`: one brace group per
//! itemset, items comma-joined in ascending order, the whole wrapped in an
//! outer pair of braces.

use crate::itemset::Itemset;
use crate::report::MiningReport;

/// Render itemsets in brace notation, keeping the given order
///
/// # Example
/// ```
/// use apriori_miner::itemset::Itemset;
/// use apriori_miner::text_output::format_itemsets;
///
/// let sets = vec![Itemset::from([2, 1]), Itemset::from([3])];
/// assert_eq!(format_itemsets(&sets), "{{1,2}{3}}");
/// assert_eq!(format_itemsets(&[]), "{}");
/// ```
pub fn format_itemsets(itemsets: &[Itemset]) -> String {
    let mut output = String::from("{");
    for itemset in itemsets {
        output.push_str(&itemset.to_string());
    }
    output.push('}');
    output
}

/// Text report formatter
#[derive(Debug)]
pub struct TextOutput<'a> {
    report: &'a MiningReport,
    show_levels: bool,
}

impl<'a> TextOutput<'a> {
    pub fn new(report: &'a MiningReport, show_levels: bool) -> Self {
        Self {
            report,
            show_levels,
        }
    }

    /// Render the report
    pub fn to_text(&self) -> String {
        let report = self.report;
        let mut output = String::new();

        output.push_str(&format!("Input file: {}\n", report.input));
        output.push_str(&format!("Minimal support: {}\n", report.min_support));
        output.push_str(&format!(
            "Frequent itemsets: {}\n",
            format_itemsets(&report.maximal_itemsets())
        ));
        output.push_str(&format!("Total items: {}\n", report.maximal.len()));
        output.push_str(&format!("Runtime: {:.6} seconds\n", report.runtime_secs()));

        if self.show_levels {
            output.push('\n');
            output.push_str(&format!(
                "{:>6} {:>12} {:>10}\n",
                "size", "candidates", "frequent"
            ));
            for level in &report.levels {
                output.push_str(&format!(
                    "{:>6} {:>12} {:>10}\n",
                    level.size, level.candidates, level.frequent
                ));
            }
        }

        output
    }
}
