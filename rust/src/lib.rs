//! # Slicebench
//!
//! Micro-benchmarks for walking a large byte buffer, driven by a small
//! sequential harness, plus a demo printing one object graph seven ways.
//!
//! Trials measure themselves and validate their own output against a known
//! checksum; a mismatch aborts the whole run.
//!
//! ```rust
//! use slicebench::{Approach, Report};
//! use std::num::NonZeroUsize;
//! use std::time::Instant;
//!
//! let data = vec![1u8; 4096];
//! let mut report = Report::begin(Vec::new()).unwrap();
//! report
//!     .run(
//!         Approach::Slicing.label(),
//!         || {
//!             let start = Instant::now();
//!             let sum = Approach::Slicing.checksum(&data, 512);
//!             assert_eq!(sum, 4096);
//!             Ok(start.elapsed())
//!         },
//!         NonZeroUsize::new(10).unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(report.records(), 1);
//! ```

pub mod bookstore;
pub mod config;
pub mod error;
pub mod format;
pub mod harness;
pub mod input;
pub mod strategy;
pub mod trial;
pub mod visualize;

pub use config::{BenchConfig, ConfigError};
pub use error::{BenchError, Result};
pub use harness::{bench, Aggregate, Report, Stats};
pub use strategy::{Approach, DEFAULT_BLOCK_SIZE};
pub use trial::{ChecksumTrial, Expected};
