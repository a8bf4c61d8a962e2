//! Run configuration
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, an optional TOML file, and command-line flags.
//!
//! # Example apriori.toml
//!
//! ```toml
//! min_support = 3
//! format = "json"
//! show_levels = true
//! ```

use crate::cli::OutputFormat;
use crate::error::{InputError, Result};
use crate::itemset::SupportCount;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one mining run
///
/// # Example
/// ```
/// use apriori_miner::config::MinerConfig;
///
/// let config = MinerConfig::default();
/// assert_eq!(config.min_support, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinerConfig {
    /// Minimum number of transactions an itemset must appear in
    pub min_support: SupportCount,

    /// Report format
    pub format: OutputFormat,

    /// Include per-level candidate/frequent counts in the report
    pub show_levels: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            format: OutputFormat::Text,
            show_levels: false,
        }
    }
}

impl MinerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MinerConfig =
            toml::from_str(content).map_err(|e| InputError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        min_support: Option<SupportCount>,
        format: Option<OutputFormat>,
        show_levels: bool,
    ) -> Self {
        if let Some(min_support) = min_support {
            self.min_support = min_support;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self.show_levels |= show_levels;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(InputError::InvalidMinSupport(self.min_support));
        }
        Ok(())
    }
}
