//! Report formatting.
//!
//! Output is a four-column CSV meant to be pasted into an ASCII table
//! generator, so durations are rendered with short unit suffixes
//! (`850ns`, `1.5µs`, `12.345678ms`, `2m3.5s`) rather than raw nanoseconds.

use crate::harness::Aggregate;
use std::fmt::Write;
use std::time::Duration;

/// Fixed CSV header, independent of how many trials run.
pub const HEADER: &str = "Approach,Min,Max,Avg";

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;

/// Render a duration with the largest fitting unit.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, 6));
    }

    let mut out = String::new();
    let total_mins = nanos / NANOS_PER_MIN;
    if total_mins > 0 {
        let hours = total_mins / 60;
        if hours > 0 {
            let _ = write!(out, "{}h", hours);
        }
        let _ = write!(out, "{}m", total_mins % 60);
    }
    let _ = write!(out, "{}s", decimal(nanos % NANOS_PER_MIN, 9));
    out
}

/// `value / 10^digits` as a decimal string, trailing zeros trimmed.
fn decimal(value: u128, digits: u32) -> String {
    let scale = 10u128.pow(digits);
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = digits as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// One CSV record: `name,min,max,avg`.
pub fn csv_record(aggregate: &Aggregate) -> String {
    format!(
        "{},{},{},{}",
        aggregate.name,
        format_duration(aggregate.min),
        format_duration(aggregate.max),
        format_duration(aggregate.avg)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_units() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_nanos(850)), "850ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_nanos(12_345_678)), "12.345678ms");
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
    }

    #[test]
    fn test_seconds_and_above() {
        assert_eq!(format_duration(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(61)), "1m1s");
        assert_eq!(format_duration(Duration::from_secs(120)), "2m0s");
        assert_eq!(format_duration(Duration::from_secs(3_600)), "1h0m0s");
        assert_eq!(
            format_duration(Duration::from_millis(3_723_250)),
            "1h2m3.25s"
        );
    }

    #[test]
    fn test_csv_record() {
        let aggregate = Aggregate {
            name: "Approach 1 (Slicing)".to_string(),
            min: Duration::from_millis(1),
            max: Duration::from_millis(3),
            avg: Duration::from_micros(2_500),
        };
        assert_eq!(csv_record(&aggregate), "Approach 1 (Slicing),1ms,3ms,2.5ms");
    }
}
