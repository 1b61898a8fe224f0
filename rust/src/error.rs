//! Error types for trials and the harness.
//!
//! Every variant here is fatal to a benchmark run: the harness propagates
//! the first error it sees and never emits a record for the failing trial.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while running trials or writing the report.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input file could not be read.
    #[error("input unavailable '{path}': {source}")]
    InputUnavailable {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The computed checksum disagrees with the expected constant.
    #[error("checksum mismatch in {approach}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Label of the approach that produced the checksum.
        approach: String,
        /// Configured checksum.
        expected: u64,
        /// Checksum computed by the approach.
        actual: u64,
    },

    /// The input file is not the one the expected checksum was taken from.
    #[error("input changed: fingerprint {actual:#010x} does not match expected {expected:#010x}")]
    InputChanged {
        /// Configured CRC-32 of the input.
        expected: u32,
        /// CRC-32 of the loaded input.
        actual: u32,
    },

    /// Failed to write the input file or the report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// True when the failure points at the input rather than the approach.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BenchError::InputUnavailable { .. } | BenchError::InputChanged { .. }
        )
    }
}

/// Result type for harness and trial operations.
pub type Result<T> = std::result::Result<T, BenchError>;
