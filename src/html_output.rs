//! HTML output format for mining reports
//!
//! Standalone page with embedded CSS: run parameters, the maximal itemsets in
//! brace notation and as a table, and optional per-level statistics.

use crate::report::MiningReport;
use crate::text_output::format_itemsets;

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    report: &'a MiningReport,
    show_levels: bool,
}

impl<'a> HtmlOutput<'a> {
    pub fn new(report: &'a MiningReport, show_levels: bool) -> Self {
        Self {
            report,
            show_levels,
        }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .itemsets {
            font-family: monospace;
            word-break: break-all;
            background-color: white;
            padding: 12px;
            border: 1px solid #ddd;
        }
        .stats-table th {
            background-color: #5cb85c;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Run parameters and totals
    fn render_summary(&self) -> String {
        let report = self.report;
        let rows = [
            ("Input file", Self::escape_html(&report.input)),
            ("Minimal support", report.min_support.to_string()),
            ("Transactions", report.transaction_count.to_string()),
            ("Total items", report.maximal.len().to_string()),
            ("Runtime (seconds)", format!("{:.6}", report.runtime_secs())),
        ];

        let mut html = String::from("    <table>\n");
        for (label, value) in rows {
            html.push_str(&format!(
                "        <tr><th>{}</th><td>{}</td></tr>\n",
                label, value
            ));
        }
        html.push_str("    </table>\n");
        html
    }

    /// Maximal itemsets, one row each
    fn render_itemsets(&self) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Maximal Frequent Itemsets</h2>\n");
        html.push_str(&format!(
            "    <div class=\"itemsets\">{}</div>\n",
            Self::escape_html(&format_itemsets(&self.report.maximal_itemsets()))
        ));

        html.push_str("    <table>\n");
        html.push_str("        <tr><th>Size</th><th>Support</th><th>Items</th></tr>\n");
        for maximal in &self.report.maximal {
            html.push_str(&format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                maximal.itemset.len(),
                maximal.support,
                Self::escape_html(&maximal.itemset.to_string())
            ));
        }
        html.push_str("    </table>\n");

        html
    }

    /// Render level statistics as HTML table
    fn render_levels(&self) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Levels</h2>\n");
        html.push_str("    <table class=\"stats-table\">\n");
        html.push_str("        <tr><th>Size</th><th>Candidates</th><th>Frequent</th></tr>\n");
        for level in &self.report.levels {
            html.push_str(&format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                level.size, level.candidates, level.frequent
            ));
        }
        html.push_str("    </table>\n");

        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Apriori Mining Report</title>\n");
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str("    <h1>Apriori Mining Report</h1>\n");
        html.push_str(&self.render_summary());
        html.push_str(&self.render_itemsets());

        if self.show_levels {
            html.push_str(&self.render_levels());
        }

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by apriori-miner\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}
