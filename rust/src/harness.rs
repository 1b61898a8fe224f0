//! Sequential benchmark harness.
//!
//! Trials time themselves: a trial is any `FnMut() -> Result<Duration>` that
//! performs its workload and returns the interval it chose to measure. This
//! lets a trial keep setup such as loading input out of the measurement.
//!
//! The harness calls a trial `iterations` times in a row, folds the
//! durations into min/max/avg and hands back an [`Aggregate`]. The first
//! trial error aborts the run; no aggregate exists for a failed trial.
//!
//! ```rust
//! use slicebench::harness::bench;
//! use std::num::NonZeroUsize;
//! use std::time::Duration;
//!
//! let iterations = NonZeroUsize::new(3).unwrap();
//! let aggregate = bench("fixed", || Ok(Duration::from_millis(2)), iterations).unwrap();
//! assert_eq!(aggregate.min, aggregate.avg);
//! ```

use crate::error::Result;
use crate::format::{csv_record, HEADER};
use std::io::Write;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Summary of one trial's repeated runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub name: String,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

/// Running min/max/total over observed durations.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    count: u64,
    total: Duration,
    min: Duration,
    max: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observed duration in.
    #[inline]
    pub fn record(&mut self, duration: Duration) {
        self.total += duration;
        if self.count == 0 || duration < self.min {
            self.min = duration;
        }
        if duration > self.max {
            self.max = duration;
        }
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Average with truncating integer division in nanoseconds.
    ///
    /// Returns zero when nothing was recorded; [`bench`] never reaches that
    /// case because its iteration count is non-zero.
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let avg = self.total.as_nanos() / u128::from(self.count);
        Duration::from_nanos(u64::try_from(avg).unwrap_or(u64::MAX))
    }

    /// Close the result set into an aggregate record.
    pub fn finish(self, name: impl Into<String>) -> Aggregate {
        Aggregate {
            name: name.into(),
            min: self.min,
            max: self.max,
            avg: self.average(),
        }
    }
}

/// Run `trial` `iterations` times and aggregate its self-reported durations.
///
/// # Errors
///
/// Returns the first error a trial yields, without running the remaining
/// iterations.
pub fn bench<F>(name: &str, mut trial: F, iterations: NonZeroUsize) -> Result<Aggregate>
where
    F: FnMut() -> Result<Duration>,
{
    let mut stats = Stats::new();

    for i in 0..iterations.get() {
        let duration = match trial() {
            Ok(duration) => duration,
            Err(e) => {
                log::error!("{}: iteration {} failed: {}", name, i + 1, e);
                return Err(e);
            }
        };
        log::trace!("{}: iteration {} took {:?}", name, i + 1, duration);
        stats.record(duration);
    }

    let aggregate = stats.finish(name);
    log::debug!(
        "{}: min={:?} max={:?} avg={:?} over {} iterations",
        aggregate.name,
        aggregate.min,
        aggregate.max,
        aggregate.avg,
        iterations
    );
    Ok(aggregate)
}

/// CSV report writer: the header on creation, then one record per trial.
pub struct Report<W: Write> {
    out: W,
    records: usize,
}

impl<W: Write> Report<W> {
    /// Start a report by writing the header line.
    pub fn begin(mut out: W) -> Result<Self> {
        writeln!(out, "{}", HEADER)?;
        Ok(Self { out, records: 0 })
    }

    /// Bench a trial and write its record.
    ///
    /// A failing trial leaves the report untouched and returns its error.
    pub fn run<F>(&mut self, name: &str, trial: F, iterations: NonZeroUsize) -> Result<Aggregate>
    where
        F: FnMut() -> Result<Duration>,
    {
        let aggregate = bench(name, trial, iterations)?;
        self.record(&aggregate)?;
        Ok(aggregate)
    }

    /// Write a precomputed aggregate.
    pub fn record(&mut self, aggregate: &Aggregate) -> Result<()> {
        writeln!(self.out, "{}", csv_record(aggregate))?;
        // Flushed per record so progress is visible during long trials.
        self.out.flush()?;
        self.records += 1;
        Ok(())
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
