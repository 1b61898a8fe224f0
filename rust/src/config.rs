//! Benchmark configuration.
//!
//! Loaded from an optional TOML file; every field has a default matching the
//! reference 30 MB input.
//!
//! ```toml
//! input = "30megabytes.bin"
//! block_size = 512
//! expected_checksum = 4010533300
//!
//! [[approach]]
//! name = "slicing"
//! iterations = 1000
//!
//! [[approach]]
//! name = "forced-copies"
//! iterations = 2
//! ```

use crate::strategy::{Approach, DEFAULT_BLOCK_SIZE};
use crate::trial::{ChecksumTrial, Expected};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Checksum of the reference 30 MB input file.
pub const DEFAULT_EXPECTED_CHECKSUM: u64 = 4_010_533_300;

/// Default input file name, resolved against the working directory.
pub const DEFAULT_INPUT: &str = "30megabytes.bin";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read configuration file.
    #[error("failed to read configuration file '{path}': {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration is well-formed but unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// One approach and how often to run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachConfig {
    pub name: Approach,
    pub iterations: NonZeroUsize,
}

impl ApproachConfig {
    pub fn with_default_iterations(approach: Approach) -> Self {
        Self {
            name: approach,
            iterations: NonZeroUsize::new(approach.default_iterations()).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Full benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub input: PathBuf,
    pub block_size: usize,
    pub expected_checksum: u64,
    pub expected_fingerprint: Option<u32>,
    #[serde(rename = "approach")]
    pub approaches: Vec<ApproachConfig>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            block_size: DEFAULT_BLOCK_SIZE,
            expected_checksum: DEFAULT_EXPECTED_CHECKSUM,
            expected_fingerprint: None,
            approaches: Approach::ALL
                .iter()
                .copied()
                .map(ApproachConfig::with_default_iterations)
                .collect(),
        }
    }
}

impl BenchConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, the TOML is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::load_str(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML string.
    pub fn load_str(content: &str) -> ConfigResult<Self> {
        let config: BenchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.block_size == 0 {
            return Err(ConfigError::Invalid("block_size must be greater than 0".to_string()));
        }
        if self.approaches.is_empty() {
            return Err(ConfigError::Invalid("at least one approach is required".to_string()));
        }
        let mut seen = HashSet::new();
        for approach in &self.approaches {
            if !seen.insert(approach.name) {
                return Err(ConfigError::Invalid(format!(
                    "approach '{}' listed more than once",
                    approach.name
                )));
            }
        }
        Ok(())
    }

    pub fn expected(&self) -> Expected {
        Expected {
            checksum: self.expected_checksum,
            fingerprint: self.expected_fingerprint,
        }
    }

    /// Build the configured trials in report order.
    pub fn trials(&self) -> Vec<(ChecksumTrial, NonZeroUsize)> {
        let expected = self.expected();
        self.approaches
            .iter()
            .map(|a| {
                (
                    ChecksumTrial::new(a.name, self.input.clone(), self.block_size, expected),
                    a.iterations,
                )
            })
            .collect()
    }
}
