//! Benchmark input files.
//!
//! Trials read the whole input before they start their clock. The expected
//! checksum depends entirely on the file's bytes, so this module can also
//! produce a reproducible input and report the checksum to configure.

use crate::error::{BenchError, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Size of the reference input file (30 MiB).
pub const DEFAULT_INPUT_SIZE: usize = 30 * 1024 * 1024;

const WRITE_CHUNK: usize = 64 * 1024;

/// Facts about an input file needed to configure trials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub len: usize,
    pub checksum: u64,
    pub fingerprint: Option<u32>,
}

impl InputSummary {
    pub fn of(data: &[u8]) -> Self {
        Self {
            len: data.len(),
            checksum: byte_sum(data),
            fingerprint: fingerprint(data),
        }
    }
}

/// Read the whole input file.
///
/// # Errors
///
/// Any IO failure is reported as [`BenchError::InputUnavailable`].
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| BenchError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Reference checksum: the sum of all bytes.
pub fn byte_sum(data: &[u8]) -> u64 {
    data.iter().map(|&b| u64::from(b)).sum()
}

/// CRC-32 of the input, when the `checksum` feature is enabled.
#[cfg(feature = "checksum")]
pub fn fingerprint(data: &[u8]) -> Option<u32> {
    Some(crc32fast::hash(data))
}

#[cfg(not(feature = "checksum"))]
pub fn fingerprint(_data: &[u8]) -> Option<u32> {
    None
}

/// Write `len` pseudo-random bytes derived from `seed` to `path`.
///
/// The same `(len, seed)` always yields the same file, and therefore the
/// same checksum.
pub fn generate_input<P: AsRef<Path>>(path: P, len: usize, seed: u64) -> Result<InputSummary> {
    let path = path.as_ref();
    let data = generate_bytes(len, seed);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for chunk in data.chunks(WRITE_CHUNK) {
        writer.write_all(chunk)?;
    }
    writer.flush()?;

    let summary = InputSummary::of(&data);
    log::info!(
        "wrote {} bytes to {} (checksum {})",
        summary.len,
        path.display(),
        summary.checksum
    );
    Ok(summary)
}

/// Deterministic pseudo-random bytes.
pub fn generate_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}
