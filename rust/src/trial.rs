//! Self-timed, checksum-gated trials.

use crate::error::{BenchError, Result};
use crate::input::{fingerprint, load_input};
use crate::strategy::Approach;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Known-good values for the configured input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    pub checksum: u64,
    /// CRC-32 of the input; lets a mismatch blame the file instead of the approach.
    pub fingerprint: Option<u32>,
}

impl Expected {
    pub fn checksum(checksum: u64) -> Self {
        Self {
            checksum,
            fingerprint: None,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: u32) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }
}

/// One approach applied to one input file.
#[derive(Debug, Clone)]
pub struct ChecksumTrial {
    pub approach: Approach,
    pub input: PathBuf,
    pub block_size: usize,
    pub expected: Expected,
}

impl ChecksumTrial {
    pub fn new(approach: Approach, input: impl Into<PathBuf>, block_size: usize, expected: Expected) -> Self {
        Self {
            approach,
            input: input.into(),
            block_size,
            expected,
        }
    }

    /// Run once and return the time spent checksumming.
    ///
    /// Loading the input is not part of the measured interval.
    ///
    /// # Errors
    ///
    /// [`BenchError::InputUnavailable`] if the file cannot be read,
    /// [`BenchError::InputChanged`] or [`BenchError::ChecksumMismatch`] if the
    /// computed checksum is wrong.
    pub fn run(&self) -> Result<Duration> {
        let data = load_input(&self.input)?;

        let start = Instant::now();
        let checksum = self.approach.checksum(&data, self.block_size);
        let elapsed = start.elapsed();

        self.gate(&data, checksum)?;
        Ok(elapsed)
    }

    fn gate(&self, data: &[u8], actual: u64) -> Result<()> {
        if actual == self.expected.checksum {
            return Ok(());
        }
        if let (Some(expected), Some(actual)) = (self.expected.fingerprint, fingerprint(data)) {
            if expected != actual {
                return Err(BenchError::InputChanged { expected, actual });
            }
        }
        Err(BenchError::ChecksumMismatch {
            approach: self.approach.label().to_string(),
            expected: self.expected.checksum,
            actual,
        })
    }
}
