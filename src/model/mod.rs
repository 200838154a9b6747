//! # Exposure Data Model
//!
//! Clean DTOs shared by the table reader, the engine, and the reports.
//!
//! Design rule: this module is pure data. No I/O, no file paths, no logging.
//! Every value here is owned by exactly one engine invocation.

pub mod actor;
pub mod records;
pub mod mode;
pub mod matrix;
pub mod exposure;

pub use actor::{ActorId, AttributeRecord, AttributeVector};
pub use records::{EdgeRecord, IncidenceRecord};
pub use mode::{ModeInfo, NetworkKind};
pub use matrix::DenseMatrix;
pub use exposure::{ExposureVector, ExposureRow};
