//! # Delimited Tables
//!
//! Reads the three file shapes a file-pair is made of:
//!
//! | File | Columns |
//! |------|---------|
//! | attribute (`*_y.csv`) | `actorId, value` |
//! | mode attribute (`*_y_mode.csv`) | `id, value, mode` |
//! | network | `fromId, toId[, weight]` |
//!
//! Ids are resolved to matrix positions here, so the engine only ever sees
//! indices. Parsers take any `BufRead` plus a source label for errors; the
//! `read_*` wrappers open a path.

pub mod attributes;
pub mod index;
pub mod network;

pub use attributes::{parse_attributes, parse_mode_attributes, read_attributes, read_mode_attributes, ModeTable};
pub use index::ActorIndex;
pub use network::{parse_edges, parse_incidence, read_edges, read_incidence};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::ActorId;
use crate::{Error, Result};

/// How to split a file into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    pub delimiter: char,
    /// First non-blank line is a column header.
    pub has_header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { delimiter: ',', has_header: true }
    }
}

/// One data line, split and trimmed. `line` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn field(&self, index: usize, name: &str, source: &str) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| self.error(source, format!("missing {name} (column {})", index + 1)))
    }

    pub fn number(&self, index: usize, name: &str, source: &str) -> Result<f64> {
        let raw = self.field(index, name, source)?;
        raw.parse::<f64>()
            .map_err(|_| self.error(source, format!("{name} '{raw}' is not a number")))
    }

    /// An integral id. `"12"` and `"12.0"` both read as 12.
    pub fn actor_id(&self, index: usize, name: &str, source: &str) -> Result<ActorId> {
        let raw = self.field(index, name, source)?;
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(ActorId(id));
        }
        match raw.parse::<f64>() {
            // 2^63 itself is out of range; `as` would saturate it to i64::MAX.
            Ok(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
                Ok(ActorId(v as i64))
            }
            Ok(v) if v.is_finite() && v.fract() == 0.0 => {
                Err(self.error(source, format!("{name} '{raw}' does not fit in a 64-bit id")))
            }
            _ => Err(self.error(source, format!("{name} '{raw}' is not an integer id"))),
        }
    }

    /// Weight column if present, otherwise 1.
    pub fn weight_or_one(&self, index: usize, source: &str) -> Result<f64> {
        match self.fields.get(index) {
            Some(f) if !f.is_empty() => self.number(index, "weight", source),
            _ => Ok(1.0),
        }
    }

    fn error(&self, source: &str, message: String) -> Error {
        Error::Parse { path: source.to_string(), line: self.line, message }
    }
}

/// Split `reader` into data rows, skipping blank lines and the header.
pub fn read_rows<R: BufRead>(reader: R, opts: &TableOptions) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut header_pending = opts.has_header;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim_start_matches('\u{feff}').trim();
        if trimmed.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }
        rows.push(Row {
            line: idx + 1,
            fields: trimmed.split(opts.delimiter).map(|f| f.trim().to_string()).collect(),
        });
    }
    Ok(rows)
}

/// Number of data records in `path`, net of the header.
pub fn count_records(path: &Path, opts: &TableOptions) -> Result<usize> {
    Ok(read_rows(open(path)?, opts)?.len())
}

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

pub(crate) fn source_label(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_and_blank_lines_skipped() {
        let text = "id,value\n\n1, 2.5\n 2 ,3\n";
        let rows = read_rows(text.as_bytes(), &TableOptions::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Row { line: 3, fields: vec!["1".into(), "2.5".into()] });
        assert_eq!(rows[1].fields, vec!["2".to_string(), "3".to_string()]);
    }

    #[test]
    fn headerless_keeps_first_line() {
        let opts = TableOptions { delimiter: '\t', has_header: false };
        let rows = read_rows("1\t2\n3\t4\n".as_bytes(), &opts).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn ids_accept_integral_floats() {
        let row = Row { line: 1, fields: vec!["12.0".into(), "x".into(), "1.5".into()] };
        assert_eq!(row.actor_id(0, "id", "t").unwrap(), ActorId(12));
        assert!(matches!(row.actor_id(2, "id", "t"), Err(Error::Parse { line: 1, .. })));
        assert!(matches!(row.number(1, "value", "t"), Err(Error::Parse { .. })));
    }

    #[test]
    fn ids_beyond_i64_rejected() {
        let row = Row {
            line: 7,
            fields: vec!["1e30".into(), "-1e30".into(), "9223372036854775808".into(), "-9.0e15".into()],
        };
        for index in 0..3 {
            let err = row.actor_id(index, "id", "t").unwrap_err();
            assert!(matches!(err, Error::Parse { line: 7, .. }), "got {err}");
        }
        assert_eq!(row.actor_id(3, "id", "t").unwrap(), ActorId(-9_000_000_000_000_000));
    }

    #[test]
    fn weight_defaults_to_one() {
        let row = Row { line: 4, fields: vec!["1".into(), "2".into()] };
        assert_eq!(row.weight_or_one(2, "t").unwrap(), 1.0);
        let row = Row { line: 4, fields: vec!["1".into(), "2".into(), "0.5".into()] };
        assert_eq!(row.weight_or_one(2, "t").unwrap(), 0.5);
    }

    #[test]
    fn count_is_net_of_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net_y.csv");
        std::fs::write(&path, "id,y\n0,1\n1,2\n\n2,3\n").unwrap();
        assert_eq!(count_records(&path, &TableOptions::default()).unwrap(), 3);
        let opts = TableOptions { has_header: false, ..TableOptions::default() };
        assert_eq!(count_records(&path, &opts).unwrap(), 4);
    }

    #[test]
    fn missing_field_reports_line() {
        let row = Row { line: 9, fields: vec!["1".into()] };
        let err = row.field(1, "value", "y.csv").unwrap_err();
        assert_eq!(err.to_string(), "Parse error in y.csv at line 9: missing value (column 2)");
    }
}
