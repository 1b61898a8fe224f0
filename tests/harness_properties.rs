//! Property tests for aggregate records.

use proptest::prelude::*;
use slicebench::bench;
use std::num::NonZeroUsize;
use std::time::Duration;

proptest! {
    /// min <= avg <= max for any non-empty result set
    #[test]
    fn prop_avg_between_min_and_max(
        nanos in prop::collection::vec(0u64..10_000_000_000, 1..200),
    ) {
        let mut it = nanos.iter().copied();
        let iterations = NonZeroUsize::new(nanos.len()).unwrap();
        let agg = bench("prop", || Ok(Duration::from_nanos(it.next().unwrap())), iterations).unwrap();

        prop_assert!(agg.min <= agg.avg, "min {:?} > avg {:?}", agg.min, agg.avg);
        prop_assert!(agg.avg <= agg.max, "avg {:?} > max {:?}", agg.avg, agg.max);
        prop_assert_eq!(agg.min, Duration::from_nanos(*nanos.iter().min().unwrap()));
        prop_assert_eq!(agg.max, Duration::from_nanos(*nanos.iter().max().unwrap()));
    }

    /// avg is total / N, truncated to the nanosecond
    #[test]
    fn prop_avg_is_truncated_mean(
        nanos in prop::collection::vec(0u64..10_000_000_000, 1..200),
    ) {
        let mut it = nanos.iter().copied();
        let iterations = NonZeroUsize::new(nanos.len()).unwrap();
        let agg = bench("prop", || Ok(Duration::from_nanos(it.next().unwrap())), iterations).unwrap();

        let total: u128 = nanos.iter().map(|&n| u128::from(n)).sum();
        let n = nanos.len() as u128;
        let avg = agg.avg.as_nanos();
        prop_assert_eq!(avg, total / n);
        prop_assert!(total - avg * n < n, "truncation lost more than one unit");
    }

    /// N = 1 collapses all three aggregates to the single observation
    #[test]
    fn prop_single_iteration(nanos in 0u64..u64::MAX / 2) {
        let d = Duration::from_nanos(nanos);
        let agg = bench("once", || Ok(d), NonZeroUsize::MIN).unwrap();
        prop_assert_eq!(agg.min, d);
        prop_assert_eq!(agg.max, d);
        prop_assert_eq!(agg.avg, d);
    }
}
