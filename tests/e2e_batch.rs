//! End-to-end batch tests: directory of file-pairs → timing log, exposure
//! tables, and per-pair outcomes, under both execution strategies.

use std::fs;
use std::path::Path;

use netexpo::report::EXPOSURE_HEADER;
use netexpo::timing::TIMING_HEADER;
use netexpo::{run_batch, BatchConfig, Error, ExecutionStrategy, NetworkKind};
use pretty_assertions::assert_eq;

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

/// Three one-mode pairs; `broken.csv` references an actor that does not exist.
fn seed_one_mode(dir: &Path) {
    write(dir, "star.csv", "from,to,weight\n0,1,1\n0,2,1\n");
    write(dir, "star_y.csv", "id,y\n0,10\n1,20\n2,30\n");
    write(dir, "chain.csv", "from,to,weight\n0,1,2\n1,2,2\n");
    write(dir, "chain_y.csv", "id,y\n0,1\n1,2\n2,3\n");
    write(dir, "broken.csv", "from,to,weight\n5,1,0.5\n");
    write(dir, "broken_y.csv", "id,y\n0,1\n1,2\n2,3\n");
}

fn config(data: &Path, out: &Path, strategy: ExecutionStrategy) -> BatchConfig {
    BatchConfig::new(data, NetworkKind::OneMode, out.join("timing.csv"))
        .with_strategy(strategy)
        .with_output_dir(out.join("exposure"))
}

fn check_one_mode_batch(strategy: ExecutionStrategy) {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    seed_one_mode(data.path());

    let summary = run_batch(&config(data.path(), out.path(), strategy)).unwrap();

    let names: Vec<&str> = summary.outcomes.iter().map(|o| o.pair.name.as_str()).collect();
    assert_eq!(names, vec!["broken.csv", "chain.csv", "star.csv"]);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.timed, 3);

    let (pair, err) = summary.failures().next().unwrap();
    assert_eq!(pair.name, "broken.csv");
    match err {
        Error::PairFailed { pair, source } => {
            assert_eq!(pair, "broken.csv");
            assert!(matches!(**source, Error::UnknownActor { .. }));
        }
        other => panic!("expected labelled failure, got {other:?}"),
    }

    let star = fs::read_to_string(out.path().join("exposure/star_exposure.csv")).unwrap();
    assert_eq!(star, format!("{EXPOSURE_HEADER}\n0,10,25\n1,20,0\n2,30,0\n"));
    let chain = fs::read_to_string(out.path().join("exposure/chain_exposure.csv")).unwrap();
    assert_eq!(chain, format!("{EXPOSURE_HEADER}\n0,1,2\n1,2,3\n2,3,0\n"));
    assert!(!out.path().join("exposure/broken_exposure.csv").exists());

    let timing = fs::read_to_string(out.path().join("timing.csv")).unwrap();
    let lines: Vec<&str> = timing.lines().collect();
    assert_eq!(lines[0], TIMING_HEADER);
    assert_eq!(lines.len(), 4);
    let mut logged: Vec<&str> = lines[1..].iter().map(|l| l.split(',').next().unwrap()).collect();
    logged.sort();
    assert_eq!(logged, vec!["broken.csv", "chain.csv", "star.csv"]);
    assert!(lines.iter().any(|l| l.starts_with("broken.csv,") && l.ends_with(",failed")));
}

// ============================================================================
// Strategies
// ============================================================================

#[test]
fn test_sequential_batch() {
    check_one_mode_batch(ExecutionStrategy::Sequential);
}

#[test]
fn test_concurrent_batch() {
    check_one_mode_batch(ExecutionStrategy::Concurrent);
}

#[test]
fn test_strategies_agree() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    seed_one_mode(data.path());

    let seq = run_batch(&config(data.path(), out.path(), ExecutionStrategy::Sequential)).unwrap();
    let par = run_batch(&config(data.path(), out.path(), ExecutionStrategy::Concurrent)).unwrap();

    let seq_reports: Vec<_> = seq.reports().cloned().collect();
    let par_reports: Vec<_> = par.reports().cloned().collect();
    assert_eq!(seq_reports, par_reports);
}

// ============================================================================
// Two-mode and file-level failures
// ============================================================================

#[test]
fn test_two_mode_batch() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(data.path(), "club.csv", "actor,group\n0,10\n0,11\n1,10\n");
    write(data.path(), "club_y_mode.csv", "id,y,mode\n0,5,1\n1,15,1\n10,0,2\n11,0,2\n");

    let cfg = BatchConfig::new(
        data.path(),
        NetworkKind::TwoMode { first_mode_flag: "1".into() },
        out.path().join("timing.csv"),
    );
    let summary = run_batch(&cfg).unwrap();
    assert_eq!(summary.failed(), 0);
    let report = summary.reports().next().unwrap();
    let exposures: Vec<f64> = report.rows.iter().map(|r| r.exposure).collect();
    assert_eq!(exposures, vec![15.0, 5.0]);
}

#[test]
fn test_missing_attribute_file_fails_only_that_pair() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    seed_one_mode(data.path());
    write(data.path(), "orphan.csv", "from,to\n0,1\n");

    let summary = run_batch(&config(data.path(), out.path(), ExecutionStrategy::Concurrent)).unwrap();
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.succeeded(), 2);
    let orphan = summary.outcomes.iter().find(|o| o.pair.name == "orphan.csv").unwrap();
    let err = orphan.result.as_ref().unwrap_err();
    assert!(!err.is_structural());
    assert!(matches!(err, Error::PairFailed { source, .. } if matches!(**source, Error::Io(_))));
}

#[test]
fn test_headerless_files() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(data.path(), "net.csv", "0,1\n");
    write(data.path(), "net_y.csv", "0,4\n1,8\n");

    let cfg = BatchConfig::new(data.path(), NetworkKind::OneMode, out.path().join("t.csv")).with_header(false);
    let summary = run_batch(&cfg).unwrap();
    let report = summary.reports().next().unwrap();
    assert_eq!(report.actor_count(), 2);
    assert_eq!(report.rows[0].exposure, 8.0);
}

#[test]
fn test_missing_data_dir_is_batch_error() {
    let out = tempfile::tempdir().unwrap();
    let cfg = BatchConfig::new(out.path().join("nope"), NetworkKind::OneMode, out.path().join("t.csv"));
    assert!(matches!(run_batch(&cfg), Err(Error::Io(_))));
}

// ============================================================================
// Single pair
// ============================================================================

#[test]
fn test_single_pair_reports_without_output_dir() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    seed_one_mode(data.path());
    write(data.path(), "values.csv", "id,y\n0,10\n1,20\n2,30\n");

    let cfg = BatchConfig::for_pair(
        data.path().join("star.csv"),
        data.path().join("values.csv"),
        NetworkKind::OneMode,
        out.path().join("timing.csv"),
    );
    let summary = run_batch(&cfg).unwrap();
    assert_eq!(summary.total(), 1);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.timed, 1);

    let mut stdout = Vec::new();
    summary.write_reports(&mut stdout).unwrap();
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        format!("# star.csv\n{EXPOSURE_HEADER}\n0,10,25\n1,20,0\n2,30,0\n")
    );
    let written: Vec<_> = fs::read_dir(out.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(written, vec![std::ffi::OsString::from("timing.csv")]);
}

#[test]
fn test_single_pair_failure_is_labelled() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    seed_one_mode(data.path());

    let cfg = BatchConfig::for_pair(
        data.path().join("broken.csv"),
        data.path().join("broken_y.csv"),
        NetworkKind::OneMode,
        out.path().join("timing.csv"),
    );
    let summary = run_batch(&cfg).unwrap();
    assert_eq!(summary.failed(), 1);
    let (pair, err) = summary.failures().next().unwrap();
    assert_eq!(pair.name, "broken.csv");
    assert!(err.is_structural());
}
