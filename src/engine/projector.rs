//! Bipartite projection: incidence matrix `A` (`p × q`) to the co-affiliation
//! matrix `C = A·Aᵗ` (`p × p`).
//!
//! `C[i][k]` is the weighted count of affiliations shared by actors `i` and
//! `k`. The diagonal holds each actor's own affiliation count. It is kept
//! as computed and flagged as excluded, so the reducer skips it while an
//! audit can still read it.

use crate::model::{DenseMatrix, ModeInfo};
use crate::{Error, Result};

/// A one-mode matrix derived from a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMatrix {
    matrix: DenseMatrix,
    diagonal_excluded: bool,
}

impl ProjectedMatrix {
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Always true for projections: `C[i][i]` is not a tie to another actor.
    pub fn diagonal_excluded(&self) -> bool {
        self.diagonal_excluded
    }

    /// Number (or total weight) of affiliations held by actor `i`.
    pub fn self_affiliation(&self, i: usize) -> Result<f64> {
        self.matrix.get(i, i)
    }

    pub fn into_matrix(self) -> DenseMatrix {
        self.matrix
    }
}

/// Both outputs of a projection.
#[derive(Debug, Clone)]
pub struct Projection {
    /// `Aᵗ`, `q × p`.
    pub transpose: DenseMatrix,
    /// `A·Aᵗ`, `p × p`.
    pub projected: ProjectedMatrix,
}

/// Project `a` to its one-mode co-affiliation matrix.
///
/// Fails with `DimensionMismatch` if `a` is not `p × q` as declared by `mode`.
pub fn project(a: &DenseMatrix, mode: &ModeInfo) -> Result<Projection> {
    let (p, q) = mode.incidence_dims();
    if a.rows() != p {
        return Err(Error::DimensionMismatch {
            what: "incidence rows (first-mode actors)".into(),
            expected: p,
            got: a.rows(),
        });
    }
    if a.cols() != q {
        return Err(Error::DimensionMismatch {
            what: "incidence columns (second-mode affiliations)".into(),
            expected: q,
            got: a.cols(),
        });
    }

    let transpose = a.transpose();
    let matrix = multiply(a, &transpose);

    tracing::debug!(p, q, "projected incidence matrix");

    Ok(Projection {
        transpose,
        projected: ProjectedMatrix { matrix, diagonal_excluded: true },
    })
}

/// `a · b` with i-j-k loop order so the inner loop walks `b` row-wise.
/// Zero entries of `a` are skipped; membership matrices are mostly zeros.
fn multiply(a: &DenseMatrix, b: &DenseMatrix) -> DenseMatrix {
    debug_assert_eq!(a.cols(), b.rows());
    let mut out = DenseMatrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        let a_row = a.row(i);
        let out_row = out.row_mut(i);
        for (j, &a_ij) in a_row.iter().enumerate() {
            if a_ij == 0.0 {
                continue;
            }
            for (acc, &b_jk) in out_row.iter_mut().zip(b.row(j)) {
                *acc += a_ij * b_jk;
            }
        }
    }
    out
}
