//! Relation matrix builder.
//!
//! Turns resolved records into dense matrices. Every index is checked
//! against the declared dimensions; the first bad record aborts the build.
//! A repeated `(row, col)` keeps the weight seen last.

use crate::model::{DenseMatrix, EdgeRecord, IncidenceRecord, ModeInfo};
use crate::{Error, Result};

/// Build the `n × n` one-mode relation matrix.
pub fn build_relation_matrix<I>(n: usize, edges: I) -> Result<DenseMatrix>
where
    I: IntoIterator<Item = EdgeRecord>,
{
    let mut matrix = DenseMatrix::zeros(n, n);
    for edge in edges {
        check_weight(edge.row, edge.col, edge.weight)?;
        matrix.set(edge.row, edge.col, edge.weight)?;
    }
    Ok(matrix)
}

/// Build the `p × q` incidence matrix described by `mode`.
pub fn build_incidence_matrix<I>(mode: &ModeInfo, records: I) -> Result<DenseMatrix>
where
    I: IntoIterator<Item = IncidenceRecord>,
{
    let (p, q) = mode.incidence_dims();
    let mut matrix = DenseMatrix::zeros(p, q);
    for rec in records {
        check_weight(rec.actor, rec.affiliation, rec.weight)?;
        matrix.set(rec.actor, rec.affiliation, rec.weight)?;
    }
    Ok(matrix)
}

fn check_weight(row: usize, col: usize, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight { row, col, weight })
    }
}
