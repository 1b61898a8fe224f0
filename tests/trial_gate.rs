//! Checksum-gated trials against real input files

use slicebench::input::{byte_sum, generate_input, load_input, InputSummary};
use slicebench::{Approach, BenchConfig, BenchError, ChecksumTrial, Expected, Report};
use std::num::NonZeroUsize;
use tempfile::TempDir;

const INPUT_LEN: usize = 64 * 1024 + 100;

fn fixture() -> (TempDir, std::path::PathBuf, InputSummary) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.bin");
    let summary = generate_input(&path, INPUT_LEN, 42).unwrap();
    (dir, path, summary)
}

#[test]
fn test_generated_input_matches_summary() {
    let (_dir, path, summary) = fixture();
    let data = load_input(&path).unwrap();
    assert_eq!(data.len(), INPUT_LEN);
    assert_eq!(summary.len, INPUT_LEN);
    assert_eq!(byte_sum(&data), summary.checksum);
}

#[test]
fn test_every_approach_passes_the_gate() {
    let (_dir, path, summary) = fixture();
    for &approach in Approach::ALL {
        let trial = ChecksumTrial::new(approach, &path, 512, Expected::checksum(summary.checksum));
        let elapsed = trial.run();
        assert!(elapsed.is_ok(), "{} failed: {:?}", approach.label(), elapsed);
    }
}

#[test]
fn test_wrong_checksum_is_fatal() {
    let (_dir, path, summary) = fixture();
    let trial = ChecksumTrial::new(
        Approach::Slicing,
        &path,
        512,
        Expected::checksum(summary.checksum + 1),
    );
    match trial.run() {
        Err(BenchError::ChecksumMismatch { approach, expected, actual }) => {
            assert_eq!(approach, "Approach 1 (Slicing)");
            assert_eq!(expected, summary.checksum + 1);
            assert_eq!(actual, summary.checksum);
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[cfg(feature = "checksum")]
#[test]
fn test_changed_input_is_blamed_on_the_file() {
    let (_dir, path, summary) = fixture();
    let fingerprint = summary.fingerprint.unwrap();

    // Same fingerprint: the approach is at fault.
    let expected = Expected::checksum(summary.checksum + 1).with_fingerprint(fingerprint);
    let err = ChecksumTrial::new(Approach::IndexedRange, &path, 512, expected)
        .run()
        .unwrap_err();
    assert!(matches!(err, BenchError::ChecksumMismatch { .. }));

    // Rewrite the file with a different seed.
    let other = generate_input(&path, INPUT_LEN, 43).unwrap();
    assert_ne!(other.checksum, summary.checksum);
    let expected = Expected::checksum(summary.checksum).with_fingerprint(fingerprint);
    let err = ChecksumTrial::new(Approach::IndexedRange, &path, 512, expected)
        .run()
        .unwrap_err();
    assert!(matches!(err, BenchError::InputChanged { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let trial = ChecksumTrial::new(
        Approach::Slicing,
        dir.path().join("30megabytes.bin"),
        512,
        Expected::checksum(4010533300),
    );
    let err = trial.run().unwrap_err();
    assert!(matches!(err, BenchError::InputUnavailable { .. }));
}

#[test]
fn test_configured_run_stops_at_first_failure() {
    let (dir, path, summary) = fixture();
    let config_path = dir.path().join("bench.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
input = "{}"
expected_checksum = {}

[[approach]]
name = "slicing"
iterations = 3

[[approach]]
name = "indirect-range"
iterations = 2
"#,
            path.display(),
            summary.checksum
        ),
    )
    .unwrap();

    let config = BenchConfig::load(&config_path).unwrap();
    let mut report = Report::begin(Vec::new()).unwrap();
    for (trial, iterations) in config.trials() {
        report.run(trial.approach.label(), || trial.run(), iterations).unwrap();
    }
    assert_eq!(report.records(), 2);

    // Corrupt the expectation: the first trial aborts and nothing is added.
    let mut broken = config.clone();
    broken.expected_checksum += 1;
    let mut report = Report::begin(Vec::new()).unwrap();
    let mut outcome = Ok(());
    for (trial, iterations) in broken.trials() {
        if let Err(e) = report.run(trial.approach.label(), || trial.run(), iterations) {
            outcome = Err(e);
            break;
        }
    }
    assert!(outcome.is_err());
    let text = String::from_utf8(report.into_inner()).unwrap();
    assert_eq!(text, "Approach,Min,Max,Avg\n");
}

#[test]
fn test_one_byte_input() {
    // Shorter than one block.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.bin");
    std::fs::write(&path, [7u8]).unwrap();
    let trial = ChecksumTrial::new(Approach::ForcedCopies, &path, 512, Expected::checksum(7));
    let iterations = NonZeroUsize::new(3).unwrap();
    let agg = slicebench::bench("tiny", || trial.run(), iterations).unwrap();
    assert!(agg.min <= agg.max);
}
