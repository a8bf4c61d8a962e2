//! Input validation errors
//!
//! The mining engine itself never fails. Everything that can go wrong comes
//! from what callers feed it, and is rejected here before mining starts.

use thiserror::Error;

/// Invalid input rejected before it reaches the mining engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid item on line {line}: {field:?} is not a non-negative integer")]
    InvalidItem { line: usize, field: String },

    #[error("Invalid minimum support: {0} (must be >= 1)")]
    InvalidMinSupport(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for input validation
pub type Result<T> = std::result::Result<T, InputError>;
