//! Exposure reduction.
//!
//! For each actor `i` of a one-mode matrix `M` and attribute values `Y`:
//!
//! ```text
//! rowSum_i = Σ_{j≠i} M[i][j]
//! E_i      = Σ_{j≠i} M[i][j]·Y_j / rowSum_i     (rowSum_i > 0)
//! E_i      = 0                                  (isolate)
//! ```
//!
//! The diagonal never contributes, whatever it holds, and neither does any
//! `j` with `M[i][j] == 0`.

use crate::model::{DenseMatrix, ExposureVector};
use crate::{Error, Result};

/// Row-normalized exposure of every actor in `m` to the values in `y`.
pub fn reduce(m: &DenseMatrix, y: &[f64]) -> Result<ExposureVector> {
    if !m.is_square() {
        return Err(Error::DimensionMismatch {
            what: "relation matrix columns".into(),
            expected: m.rows(),
            got: m.cols(),
        });
    }
    if y.len() != m.rows() {
        return Err(Error::DimensionMismatch {
            what: "attribute vector length".into(),
            expected: m.rows(),
            got: y.len(),
        });
    }

    let mut isolates = 0usize;
    let values = m
        .row_iter()
        .enumerate()
        .map(|(i, row)| {
            let (weighted, total) = row_sums(i, row, y);
            if total == 0.0 {
                isolates += 1;
                0.0
            } else {
                weighted / total
            }
        })
        .collect();

    tracing::debug!(actors = m.rows(), isolates, "reduced exposure");
    Ok(ExposureVector::new(values))
}

/// `(Σ_{j≠i} w·y_j, Σ_{j≠i} w)` for row `i`. Zero weights are skipped so a
/// non-finite `y_j` of an unrelated actor cannot turn into `0·inf = NaN`.
#[inline]
fn row_sums(i: usize, row: &[f64], y: &[f64]) -> (f64, f64) {
    row.iter()
        .zip(y)
        .enumerate()
        .filter(|&(j, (&w, _))| j != i && w != 0.0)
        .fold((0.0, 0.0), |(weighted, total), (_, (&w, &y_j))| {
            (weighted + w * y_j, total + w)
        })
}
