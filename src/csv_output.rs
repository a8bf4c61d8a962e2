//! CSV output format for maximal itemsets

use crate::report::{MaximalItemset, MiningReport};

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    report: &'a MiningReport,
}

impl<'a> CsvOutput<'a> {
    pub fn new(report: &'a MiningReport) -> Self {
        Self { report }
    }

    fn header() -> &'static str {
        "size,support,items"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(maximal: &MaximalItemset) -> String {
        let items: Vec<String> = maximal.itemset.iter().map(|i| i.to_string()).collect();

        [
            maximal.itemset.len().to_string(),
            maximal.support.to_string(),
            Self::escape_field(&items.join(",")),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for maximal in &self.report.maximal {
            output.push_str(&Self::format_row(maximal));
            output.push('\n');
        }

        output
    }
}
