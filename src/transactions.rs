//! Transaction loading from comma-separated files
//!
//! One transaction per line, items as comma-separated non-negative integers:
//!
//! ```text
//! 1,2,3
//! 1,2
//! 2, 3
//! ```
//!
//! Whitespace around an item is ignored, repeated items collapse, and a blank
//! line is an empty transaction. A field may be wrapped in double quotes
//! (`"1","2"`), as spreadsheet exports write them; the quotes are stripped
//! before the item is parsed.

use crate::error::{InputError, Result};
use crate::itemset::{Item, Itemset, Transaction};
use anyhow::Context;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Strip one pair of surrounding double quotes and unescape `""`
fn unquote(field: &str) -> Cow<'_, str> {
    match field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) if inner.contains("\"\"") => Cow::Owned(inner.replace("\"\"", "\"")),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(field),
    }
}

/// Parse one line into a transaction; `line` is 1-based and only used in errors
pub fn parse_transaction(row: &str, line: usize) -> Result<Transaction> {
    let row = row.trim();
    if row.is_empty() {
        return Ok(Itemset::default());
    }

    row.split(',')
        .map(|field| {
            let field = field.trim();
            unquote(field)
                .trim()
                .parse::<Item>()
                .map_err(|_| InputError::InvalidItem {
                    line,
                    field: field.to_string(),
                })
        })
        .collect::<Result<Vec<Item>>>()
        .map(Itemset::new)
}

/// Parse a whole document, keeping line order
///
/// # Example
/// ```
/// use apriori_miner::itemset::Itemset;
/// use apriori_miner::transactions::parse_transactions;
///
/// let transactions = parse_transactions("1,2,3\n3, 2\n").unwrap();
/// assert_eq!(transactions, vec![Itemset::from([1, 2, 3]), Itemset::from([2, 3])]);
///
/// assert!(parse_transactions("1,x").is_err());
/// ```
pub fn parse_transactions(content: &str) -> Result<Vec<Transaction>> {
    content
        .lines()
        .enumerate()
        .map(|(index, row)| parse_transaction(row, index + 1))
        .collect()
}

/// Read and parse a transaction file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Transaction>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let transactions = parse_transactions(&content)
        .with_context(|| format!("Failed to parse transactions from {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        transactions = transactions.len(),
        "loaded transactions"
    );

    Ok(transactions)
}
