//! `netexpo <config.json>` — run a batch of exposure computations.
//!
//! Without `output_dir` in the config, exposure tables go to stdout.
//! Exit codes: 0 all pairs succeeded, 1 a pair failed or the config is
//! invalid, 2 usage error. Log level comes from `RUST_LOG` (default `info`).

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use netexpo::{run_batch, BatchConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(config_path), None) = (args.next(), args.next()) else {
        eprintln!("usage: netexpo <config.json>");
        return ExitCode::from(2);
    };

    init_tracing();

    let config = match BatchConfig::from_path(&PathBuf::from(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %config_path, error = %e, "could not load config");
            return ExitCode::FAILURE;
        }
    };

    let summary = match run_batch(&config) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "batch aborted");
            return ExitCode::FAILURE;
        }
    };

    match summary.to_json() {
        Ok(json) => tracing::debug!(summary = %json, "batch summary"),
        Err(e) => tracing::warn!(error = %e, "could not render summary"),
    }
    if config.output_dir.is_none() {
        let mut stdout = std::io::stdout().lock();
        let written = summary.write_reports(&mut stdout).and_then(|()| {
            stdout.flush()?;
            Ok(())
        });
        if let Err(e) = written {
            tracing::error!(error = %e, "could not write exposure tables");
            return ExitCode::FAILURE;
        }
    }
    eprintln!(
        "{} pairs: {} succeeded, {} failed (timing log: {})",
        summary.total(),
        summary.succeeded(),
        summary.failed(),
        config.timing_log.display(),
    );
    for (pair, err) in summary.failures() {
        eprintln!("FAILED {}: {}", pair.name, err);
    }

    if summary.failed() == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
