//! # netexpo — Network Exposure Scores
//!
//! Computes a per-actor *exposure* score over relational data: for every
//! actor, the relation-weighted average of the attribute values of the
//! actors it is tied to.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `engine::compute_exposure` is a function of its inputs.
//!    It holds no state, performs no I/O, and owns every buffer it allocates.
//! 2. **Clean DTOs**: `AttributeVector`, `DenseMatrix`, `ExposureVector` cross
//!    all boundaries between tables, engine, and reports.
//! 3. **What vs. how**: `ExposureRequest` says *what* to compute,
//!    `ExecutionStrategy` says *how* a batch is scheduled.
//! 4. **One shared sink**: concurrent workers share nothing but the timing log
//!    channel.
//!
//! ## Quick Start
//!
//! ```rust
//! use netexpo::{compute_exposure, ActorId, AttributeRecord, AttributeVector, EdgeRecord, ExposureRequest};
//!
//! # fn example() -> netexpo::Result<()> {
//! let attributes = AttributeVector::new(vec![
//!     AttributeRecord::new(ActorId(0), 10.0),
//!     AttributeRecord::new(ActorId(1), 20.0),
//!     AttributeRecord::new(ActorId(2), 30.0),
//! ])?;
//! let edges = vec![EdgeRecord::new(0, 1, 1.0), EdgeRecord::new(0, 2, 1.0)];
//!
//! let outcome = compute_exposure(ExposureRequest::OneMode { attributes, edges })?;
//! assert_eq!(outcome.exposure.as_slice(), &[25.0, 0.0, 0.0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipelines
//!
//! | Input | Steps |
//! |-------|-------|
//! | One-mode | edges → relation matrix → reduce |
//! | Two-mode | incidence records → incidence matrix → `A·Aᵗ` → reduce |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod engine;
pub mod table;
pub mod batch;
pub mod timing;
pub mod report;
pub mod config;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    ActorId, AttributeRecord, AttributeVector,
    EdgeRecord, IncidenceRecord,
    DenseMatrix, ModeInfo, NetworkKind,
    ExposureVector, ExposureRow,
};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use engine::{
    compute_exposure, ExposureRequest, ExposureOutcome,
    ProjectedMatrix, Projection,
};

// ============================================================================
// Re-exports: Batch driver
// ============================================================================

pub use batch::{
    run_batch, BatchSummary, ExecutionStrategy, FilePair, PairOutcome,
};
pub use config::{BatchConfig, PairPaths};
pub use report::ExposureReport;
pub use table::TableOptions;

// ============================================================================
// Error Types
// ============================================================================

/// Which side of a matrix an out-of-range index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Dimension mismatch: {what} expected {expected}, got {got}")]
    DimensionMismatch { what: String, expected: usize, got: usize },

    #[error("Index out of range: {axis} index {index} not below {bound}")]
    IndexOutOfRange { axis: Axis, index: usize, bound: usize },

    #[error("Unknown {role} id {id}")]
    UnknownActor { id: ActorId, role: &'static str },

    #[error("Duplicate actor id {id}")]
    DuplicateActor { id: ActorId },

    #[error("Invalid weight {weight} at ({row}, {col}): weights must be finite and non-negative")]
    InvalidWeight { row: usize, col: usize, weight: f64 },

    #[error("Invalid attribute value {value} for actor {id}: values must be finite")]
    InvalidAttribute { id: ActorId, value: f64 },

    #[error("Parse error in {path} at line {line}: {message}")]
    Parse { path: String, line: usize, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("{pair}: {source}")]
    PairFailed { pair: String, source: Box<Error> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Label an error with the file-pair it aborted.
    pub fn for_pair(pair: impl Into<String>, source: Error) -> Self {
        Error::PairFailed { pair: pair.into(), source: Box::new(source) }
    }

    /// True for data errors that invalidate a single file-pair's input.
    pub fn is_structural(&self) -> bool {
        match self {
            Error::DimensionMismatch { .. }
            | Error::IndexOutOfRange { .. }
            | Error::UnknownActor { .. }
            | Error::DuplicateActor { .. }
            | Error::InvalidWeight { .. }
            | Error::InvalidAttribute { .. } => true,
            Error::PairFailed { source, .. } => source.is_structural(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
