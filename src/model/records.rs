//! Parsed relation records, already resolved to matrix positions.

use serde::{Deserialize, Serialize};

/// One-mode relation `row → col` with strength `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub row: usize,
    pub col: usize,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(row: usize, col: usize, weight: f64) -> Self {
        Self { row, col, weight }
    }
}

/// Two-mode membership of first-mode actor `actor` in affiliation `affiliation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncidenceRecord {
    pub actor: usize,
    pub affiliation: usize,
    pub weight: f64,
}

impl IncidenceRecord {
    pub fn new(actor: usize, affiliation: usize, weight: f64) -> Self {
        Self { actor, affiliation, weight }
    }
}
