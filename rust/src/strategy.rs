//! Byte iteration strategies.
//!
//! Every approach computes the same byte-sum checksum over the input, walked
//! in fixed-size blocks. They differ only in how a block reaches the summing
//! routine: as a sub-slice, as an index range over the whole buffer, as an
//! index range through an extra reference, or as a fresh copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hint::black_box;
use std::str::FromStr;

/// Block size the reference checksum was measured with.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// One way of walking the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Approach {
    /// Sub-slices handed to an iterator-based sum.
    Slicing,
    /// Whole buffer plus `[start, end)`, summed by index.
    IndexedRange,
    /// Reference to the slice reference plus `[start, end)`.
    IndirectRange,
    /// Copies every block and the remaining tail at each step.
    ForcedCopies,
    /// Blocks summed on the rayon pool.
    #[cfg(feature = "parallel")]
    ParallelChunks,
}

impl Approach {
    /// All approaches, in report order.
    pub const ALL: &'static [Approach] = &[
        Approach::Slicing,
        Approach::IndexedRange,
        Approach::IndirectRange,
        Approach::ForcedCopies,
        #[cfg(feature = "parallel")]
        Approach::ParallelChunks,
    ];

    /// Label printed in the report's first column.
    pub fn label(&self) -> &'static str {
        match self {
            Approach::Slicing => "Approach 1 (Slicing)",
            Approach::IndexedRange => "Approach 2 (Array,Range)",
            Approach::IndirectRange => "Approach 3 (Array by Reference, Range)",
            Approach::ForcedCopies => "Approach 4 (Slicing with forced copies)",
            #[cfg(feature = "parallel")]
            Approach::ParallelChunks => "Approach 5 (Parallel chunks)",
        }
    }

    /// Identifier used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Approach::Slicing => "slicing",
            Approach::IndexedRange => "indexed-range",
            Approach::IndirectRange => "indirect-range",
            Approach::ForcedCopies => "forced-copies",
            #[cfg(feature = "parallel")]
            Approach::ParallelChunks => "parallel-chunks",
        }
    }

    /// Iterations used when nothing else is configured.
    ///
    /// Forced copies are quadratic in the input size, so they only get two.
    pub fn default_iterations(&self) -> usize {
        match self {
            Approach::ForcedCopies => 2,
            _ => 1000,
        }
    }

    /// Checksum of `data` walked in blocks of `block_size` bytes.
    ///
    /// A trailing partial block is included. `block_size` must be non-zero.
    pub fn checksum(&self, data: &[u8], block_size: usize) -> u64 {
        assert!(block_size > 0, "block size must be non-zero");
        match self {
            Approach::Slicing => checksum_slicing(data, block_size),
            Approach::IndexedRange => checksum_indexed(data, block_size),
            Approach::IndirectRange => checksum_indirect(data, block_size),
            Approach::ForcedCopies => checksum_forced_copies(data, block_size),
            #[cfg(feature = "parallel")]
            Approach::ParallelChunks => checksum_parallel(data, block_size),
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Approach {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Approach::ALL
            .iter()
            .copied()
            .find(|a| a.id() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Approach::ALL.iter().map(|a| a.id()).collect();
                format!("unknown approach '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[inline]
fn sum_block(block: &[u8]) -> u64 {
    block.iter().map(|&b| u64::from(b)).sum()
}

#[inline]
#[allow(clippy::needless_range_loop)]
fn sum_range(buf: &[u8], start: usize, end: usize) -> u64 {
    let mut checksum = 0u64;
    for i in start..end {
        checksum += u64::from(buf[i]);
    }
    checksum
}

#[inline]
#[allow(clippy::needless_range_loop)]
fn sum_range_indirect(buf: &&[u8], start: usize, end: usize) -> u64 {
    let mut checksum = 0u64;
    for i in start..end {
        checksum += u64::from((*buf)[i]);
    }
    checksum
}

fn checksum_slicing(data: &[u8], block_size: usize) -> u64 {
    data.chunks(block_size).map(sum_block).sum()
}

fn checksum_indexed(data: &[u8], block_size: usize) -> u64 {
    let mut checksum = 0u64;
    let mut start = 0;
    while start < data.len() {
        let end = (start + block_size).min(data.len());
        checksum += sum_range(data, start, end);
        start += block_size;
    }
    checksum
}

fn checksum_indirect(data: &[u8], block_size: usize) -> u64 {
    let mut checksum = 0u64;
    let mut start = 0;
    while start < data.len() {
        let end = (start + block_size).min(data.len());
        checksum += sum_range_indirect(&data, start, end);
        start += block_size;
    }
    checksum
}

fn checksum_forced_copies(data: &[u8], block_size: usize) -> u64 {
    let mut checksum = 0u64;
    let mut rest = data.to_vec();
    while !rest.is_empty() {
        let take = block_size.min(rest.len());
        let block = black_box(rest[..take].to_vec());
        checksum += sum_block(&block);
        rest = black_box(rest[take..].to_vec());
    }
    checksum
}

#[cfg(feature = "parallel")]
fn checksum_parallel(data: &[u8], block_size: usize) -> u64 {
    use rayon::prelude::*;

    data.par_chunks(block_size).map(sum_block).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 % 251) as u8).collect()
    }

    #[test]
    fn test_all_approaches_agree() {
        for len in [0, 1, 511, 512, 513, 4096, 10_000] {
            let data = sample(len);
            let expected = sum_block(&data);
            for approach in Approach::ALL {
                assert_eq!(
                    approach.checksum(&data, DEFAULT_BLOCK_SIZE),
                    expected,
                    "{} disagrees at len {}",
                    approach.label(),
                    len
                );
            }
        }
    }

    #[test]
    fn test_block_size_does_not_change_checksum() {
        let data = sample(3_000);
        let expected = sum_block(&data);
        for block_size in [1, 7, 64, 3_000, 10_000] {
            assert_eq!(Approach::IndexedRange.checksum(&data, block_size), expected);
            assert_eq!(Approach::ForcedCopies.checksum(&data, block_size), expected);
        }
    }

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for approach in Approach::ALL {
            assert_eq!(approach.id().parse::<Approach>().unwrap(), *approach);
        }
        let err = "bogus".parse::<Approach>().unwrap_err();
        assert!(err.contains("slicing"));
    }

    #[test]
    fn test_forced_copies_get_few_iterations() {
        assert_eq!(Approach::ForcedCopies.default_iterations(), 2);
        assert_eq!(Approach::Slicing.default_iterations(), 1000);
    }

    #[test]
    #[should_panic(expected = "block size must be non-zero")]
    fn test_zero_block_size_panics() {
        Approach::Slicing.checksum(&[1, 2, 3], 0);
    }
}
