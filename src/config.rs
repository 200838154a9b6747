//! Batch configuration.
//!
//! Loaded once from JSON, validated, then never mutated. Workers read it
//! through a shared reference.
//!
//! ```json
//! {
//!   "data_dir": "data/affiliation",
//!   "kind": { "type": "two_mode", "first_mode_flag": "1" },
//!   "strategy": "concurrent",
//!   "timing_log": "out/timing.csv",
//!   "output_dir": "out/exposure"
//! }
//! ```
//!
//! A single pair can be named directly instead of a directory:
//!
//! ```json
//! {
//!   "pair": { "network": "data/star.csv", "attributes": "data/star_y.csv" },
//!   "kind": { "type": "one_mode" },
//!   "timing_log": "out/timing.csv"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::batch::ExecutionStrategy;
use crate::model::NetworkKind;
use crate::table::TableOptions;
use crate::{Error, Result};

/// Explicit paths of one network file and its attribute file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairPaths {
    pub network: PathBuf,
    pub attributes: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory holding network files and their attribute files.
    /// Empty when `pair` is given.
    #[serde(default)]
    pub data_dir: PathBuf,
    /// Run exactly this pair instead of discovering pairs in `data_dir`.
    #[serde(default)]
    pub pair: Option<PairPaths>,
    pub kind: NetworkKind,
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub strategy: ExecutionStrategy,
    /// Worker threads for `Concurrent`; 0 lets rayon decide.
    #[serde(default)]
    pub threads: usize,
    /// CSV file receiving one elapsed-time row per file-pair.
    pub timing_log: PathBuf,
    /// If set, each successful pair writes `<stem>_exposure.csv` here.
    /// Otherwise reports are only returned (the CLI prints them to stdout).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_has_header() -> bool {
    true
}

fn default_delimiter() -> char {
    ','
}

impl BatchConfig {
    pub fn new(data_dir: impl Into<PathBuf>, kind: NetworkKind, timing_log: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            pair: None,
            kind,
            has_header: default_has_header(),
            delimiter: default_delimiter(),
            strategy: ExecutionStrategy::default(),
            threads: 0,
            timing_log: timing_log.into(),
            output_dir: None,
        }
    }

    /// Config for one explicitly named pair.
    pub fn for_pair(
        network: impl Into<PathBuf>,
        attributes: impl Into<PathBuf>,
        kind: NetworkKind,
        timing_log: impl Into<PathBuf>,
    ) -> Self {
        let mut config = Self::new(PathBuf::new(), kind, timing_log);
        config.pair = Some(PairPaths { network: network.into(), attributes: attributes.into() });
        config
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let has_dir = !self.data_dir.as_os_str().is_empty();
        match (&self.pair, has_dir) {
            (None, false) => return Err(Error::Config("one of data_dir or pair is required".into())),
            (Some(_), true) => return Err(Error::Config("data_dir and pair are mutually exclusive".into())),
            (Some(pair), false) => {
                if pair.network.as_os_str().is_empty() || pair.attributes.as_os_str().is_empty() {
                    return Err(Error::Config("pair needs both network and attributes".into()));
                }
            }
            (None, true) => {}
        }
        // Saved tables end in `.csv` and would be picked up as networks next run.
        if has_dir && self.output_dir.as_deref() == Some(self.data_dir.as_path()) {
            return Err(Error::Config("output_dir must differ from data_dir".into()));
        }
        if self.timing_log.as_os_str().is_empty() {
            return Err(Error::Config("timing_log must not be empty".into()));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' || self.delimiter == '"' {
            return Err(Error::Config(format!("unusable delimiter {:?}", self.delimiter)));
        }
        if let NetworkKind::TwoMode { first_mode_flag } = &self.kind {
            if first_mode_flag.trim().is_empty() {
                return Err(Error::Config("two_mode requires a non-empty first_mode_flag".into()));
            }
        }
        Ok(())
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions { delimiter: self.delimiter, has_header: self.has_header }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_in() {
        let config = BatchConfig::from_json_str(
            r#"{"data_dir": "data", "kind": {"type": "one_mode"}, "timing_log": "t.csv"}"#,
        ).unwrap();
        assert_eq!(config, BatchConfig::new("data", NetworkKind::OneMode, "t.csv"));
        assert_eq!(config.table_options(), TableOptions::default());
    }

    #[test]
    fn two_mode_with_strategy() {
        let config = BatchConfig::from_json_str(
            r#"{
                "data_dir": "aff",
                "kind": {"type": "two_mode", "first_mode_flag": "1"},
                "strategy": "concurrent",
                "threads": 4,
                "has_header": false,
                "delimiter": ";",
                "timing_log": "t.csv",
                "output_dir": "out"
            }"#,
        ).unwrap();
        assert_eq!(config.kind, NetworkKind::TwoMode { first_mode_flag: "1".into() });
        assert_eq!(config.strategy, ExecutionStrategy::Concurrent);
        assert_eq!(config.threads, 4);
        assert_eq!(config.table_options(), TableOptions { delimiter: ';', has_header: false });
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn blank_first_mode_flag_rejected() {
        let err = BatchConfig::from_json_str(
            r#"{"data_dir": "d", "kind": {"type": "two_mode", "first_mode_flag": " "}, "timing_log": "t.csv"}"#,
        ).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn single_pair_without_data_dir() {
        let config = BatchConfig::from_json_str(
            r#"{
                "pair": {"network": "d/star.csv", "attributes": "d/star_y.csv"},
                "kind": {"type": "one_mode"},
                "timing_log": "t.csv"
            }"#,
        ).unwrap();
        assert_eq!(config, BatchConfig::for_pair("d/star.csv", "d/star_y.csv", NetworkKind::OneMode, "t.csv"));
        assert!(config.data_dir.as_os_str().is_empty());
    }

    #[test]
    fn source_must_be_exactly_one() {
        let neither = BatchConfig::from_json_str(r#"{"kind": {"type": "one_mode"}, "timing_log": "t.csv"}"#);
        assert!(matches!(neither, Err(Error::Config(_))));

        let mut both = BatchConfig::for_pair("n.csv", "n_y.csv", NetworkKind::OneMode, "t.csv");
        both.data_dir = PathBuf::from("d");
        assert!(matches!(both.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn output_dir_cannot_be_data_dir() {
        let config = BatchConfig::new("d", NetworkKind::OneMode, "t.csv").with_output_dir("d");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        let config = BatchConfig::new("d", NetworkKind::OneMode, "t.csv").with_output_dir("d/out");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_kind_is_json_error() {
        let err = BatchConfig::from_json_str(
            r#"{"data_dir": "d", "kind": {"type": "three_mode"}, "timing_log": "t.csv"}"#,
        ).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
