//! Elapsed-time log.
//!
//! One CSV row per file-pair. The log is the only artifact shared by batch
//! workers; workers send `TimingRecord`s over a channel and a single writer
//! thread appends them, so no worker ever blocks on another's I/O.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender};
use serde::Serialize;

use crate::Result;

pub const TIMING_HEADER: &str = "file_name,start_unix_nanos,end_unix_nanos,elapsed_micros,status";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingRecord {
    pub file_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub elapsed: Duration,
    pub succeeded: bool,
}

impl TimingRecord {
    fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.file_name,
            unix_nanos(&self.start),
            unix_nanos(&self.end),
            self.elapsed.as_micros(),
            if self.succeeded { "ok" } else { "failed" },
        )
    }
}

fn unix_nanos(t: &DateTime<Utc>) -> i64 {
    t.timestamp_nanos_opt().unwrap_or(i64::MAX)
}

/// Measures one file-pair run.
pub struct Stopwatch {
    file_name: String,
    start: DateTime<Utc>,
    started: Instant,
}

impl Stopwatch {
    pub fn start(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            start: Utc::now(),
            started: Instant::now(),
        }
    }

    pub fn finish(self, succeeded: bool) -> TimingRecord {
        TimingRecord {
            elapsed: self.started.elapsed(),
            end: Utc::now(),
            file_name: self.file_name,
            start: self.start,
            succeeded,
        }
    }
}

/// CSV writer for timing rows. Writes the header on creation.
pub struct TimingLog<W: Write> {
    writer: W,
    rows: usize,
}

impl TimingLog<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> TimingLog<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{TIMING_HEADER}")?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn append(&mut self, record: &TimingRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.to_csv_line())?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Drain `rx` into `log` until every sender is dropped.
pub fn drain<W: Write>(mut log: TimingLog<W>, rx: Receiver<TimingRecord>) -> Result<TimingLog<W>> {
    for record in rx {
        log.append(&record)?;
    }
    Ok(log)
}

/// Channel plus writer thread for a batch run.
pub fn spawn_sink<W>(log: TimingLog<W>) -> (Sender<TimingRecord>, JoinHandle<Result<usize>>)
where
    W: Write + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = std::thread::spawn(move || {
        let log = drain(log, rx)?;
        let rows = log.rows();
        log.finish()?;
        Ok(rows)
    });
    (tx, handle)
}
