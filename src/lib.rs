//! apriori-miner - Apriori frequent itemset mining with maximal set extraction
//!
//! This library provides the level-wise Apriori engine (seeding, join/prune
//! candidate generation, support counting, maximal extraction) along with the
//! transaction loader, run configuration and report formatters used by the
//! `apriori-miner` binary.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod html_output;
pub mod itemset;
pub mod json_output;
pub mod mining;
pub mod report;
pub mod text_output;
pub mod transactions;
