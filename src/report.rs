//! Exposure reports.
//!
//! `actor_id,attribute,exposure` tables, one per successful file-pair.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::ExposureOutcome;
use crate::model::ExposureRow;
use crate::Result;

pub const EXPOSURE_HEADER: &str = "actor_id,attribute,exposure";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureReport {
    /// Network file name the report was computed from.
    pub pair_name: String,
    pub rows: Vec<ExposureRow>,
}

impl ExposureReport {
    pub fn from_outcome(pair_name: impl Into<String>, outcome: &ExposureOutcome) -> Self {
        Self {
            pair_name: pair_name.into(),
            rows: outcome.rows(),
        }
    }

    pub fn actor_count(&self) -> usize {
        self.rows.len()
    }
}

/// Write `report` as CSV.
pub fn write_exposure_table(report: &ExposureReport, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{EXPOSURE_HEADER}")?;
    for row in &report.rows {
        writeln!(writer, "{},{},{}", row.actor_id, row.attribute, row.exposure)?;
    }
    Ok(())
}

/// Write `report` to `<dir>/<stem>_exposure.csv` and return the path.
pub fn save_exposure_table(report: &ExposureReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let stem = Path::new(&report.pair_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.pair_name.clone());
    let path = dir.join(format!("{stem}_exposure.csv"));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_exposure_table(report, &mut writer)?;
    writer.flush()?;
    Ok(path)
}
