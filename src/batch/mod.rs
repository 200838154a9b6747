//! # Batch Driver
//!
//! Runs the engine over every file-pair in a directory, or over the one
//! pair a config names explicitly.
//!
//! ```text
//! discover_pairs ──► [pair₁, pair₂, …] ──strategy──► run_pair per pair ──► BatchSummary
//!                                              │
//!                                              └─ TimingRecord ──channel──► timing log writer
//! ```
//!
//! Each pair owns its own file handles and matrices. The timing log is the
//! only shared artifact and is written by one thread. A failing pair is
//! recorded and the batch moves on.

pub mod discovery;
pub mod pair;

pub use discovery::{discover_pairs, FilePair};
pub use pair::{load_request, run_pair};

use std::io::Write;

use crossbeam_channel::Sender;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BatchConfig;
use crate::report::{write_exposure_table, ExposureReport};
use crate::timing::{spawn_sink, Stopwatch, TimingLog, TimingRecord};
use crate::{Error, Result};

/// How pairs are scheduled. Orthogonal to what each pair computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// One pair after another on the calling thread.
    #[default]
    Sequential,
    /// One rayon task per pair.
    Concurrent,
}

/// Result for one pair. Failures carry `Error::PairFailed`.
#[derive(Debug)]
pub struct PairOutcome {
    pub pair: FilePair,
    pub result: Result<ExposureReport>,
}

impl PairOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a batch run produced, in discovery order.
#[derive(Debug)]
pub struct BatchSummary {
    pub outcomes: Vec<PairOutcome>,
    /// Rows written to the timing log.
    pub timed: usize,
}

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    total: usize,
    succeeded: usize,
    failed: usize,
    failures: Vec<FailureJson<'a>>,
}

#[derive(Debug, Serialize)]
struct FailureJson<'a> {
    pair: &'a str,
    error: String,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn reports(&self) -> impl Iterator<Item = &ExposureReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&FilePair, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.pair, e)))
    }

    /// Every successful report as CSV, each table preceded by a `# <pair>` line.
    pub fn write_reports(&self, writer: &mut dyn Write) -> Result<()> {
        for report in self.reports() {
            writeln!(writer, "# {}", report.pair_name)?;
            write_exposure_table(report, writer)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let summary = SummaryJson {
            total: self.total(),
            succeeded: self.succeeded(),
            failed: self.failed(),
            failures: self
                .failures()
                .map(|(pair, err)| FailureJson { pair: &pair.name, error: err.to_string() })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}

/// The configured pair, or every pair discovered under `config.data_dir`.
fn collect_pairs(config: &BatchConfig) -> Result<Vec<FilePair>> {
    match &config.pair {
        Some(paths) => Ok(vec![FilePair::new(&paths.network, &paths.attributes)]),
        None => discover_pairs(&config.data_dir, &config.kind),
    }
}

/// Run every pair the config selects.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary> {
    config.validate()?;
    let pairs = collect_pairs(config)?;
    tracing::info!(
        dir = %config.data_dir.display(),
        single = config.pair.is_some(),
        pairs = pairs.len(),
        strategy = ?config.strategy,
        "starting batch"
    );

    let log = TimingLog::create(&config.timing_log)?;
    let (tx, sink) = spawn_sink(log);

    let outcomes: Vec<PairOutcome> = match config.strategy {
        ExecutionStrategy::Sequential => pairs
            .into_iter()
            .map(|pair| timed_run(pair, config, &tx))
            .collect(),
        ExecutionStrategy::Concurrent => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .thread_name(|i| format!("netexpo-worker-{i}"))
                .build()
                .map_err(|e| Error::Config(format!("thread pool: {e}")))?;
            pool.install(|| {
                pairs
                    .into_par_iter()
                    .map(|pair| timed_run(pair, config, &tx))
                    .collect()
            })
        }
    };

    drop(tx);
    let timed = sink
        .join()
        .map_err(|_| Error::Io(std::io::Error::other("timing log writer panicked")))??;

    let summary = BatchSummary { outcomes, timed };
    tracing::info!(
        total = summary.total(),
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "batch finished"
    );
    Ok(summary)
}

fn timed_run(pair: FilePair, config: &BatchConfig, timing: &Sender<TimingRecord>) -> PairOutcome {
    let watch = Stopwatch::start(pair.name.clone());
    let result = run_pair(&pair, config).map_err(|e| Error::for_pair(&pair.name, e));
    let record = watch.finish(result.is_ok());

    match &result {
        Ok(report) => tracing::debug!(
            pair = %pair.name,
            actors = report.actor_count(),
            elapsed_us = record.elapsed.as_micros() as u64,
            "pair done"
        ),
        Err(e) => tracing::warn!(pair = %pair.name, error = %e, "pair failed"),
    }

    if timing.send(record).is_err() {
        tracing::warn!(pair = %pair.name, "timing log writer gone; record dropped");
    }
    PairOutcome { pair, result }
}
