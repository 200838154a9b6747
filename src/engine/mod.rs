//! # Exposure Engine
//!
//! Selects the one-mode or two-mode pipeline and runs it to completion.
//!
//! ```text
//! OneMode: edges ──build_relation_matrix──► M ──────────────────────┐
//!                                                                   ├─► reduce(·, Y) ─► E
//! TwoMode: incidence ──build_incidence_matrix──► A ──project──► C ──┘
//! ```
//!
//! Every call allocates its own matrices and drops them before returning.
//! There is no state between calls, so one engine call per worker thread
//! needs no locking.

pub mod builder;
pub mod projector;
pub mod reducer;

pub use builder::{build_incidence_matrix, build_relation_matrix};
pub use projector::{project, ProjectedMatrix, Projection};
pub use reducer::reduce;

use crate::model::*;
use crate::{Error, Result};

/// What to compute for one file-pair.
#[derive(Debug, Clone)]
pub enum ExposureRequest {
    /// Actor-to-actor relation. `attributes` has one entry per actor.
    OneMode {
        attributes: AttributeVector,
        edges: Vec<EdgeRecord>,
    },
    /// Actor-to-affiliation membership. `attributes` holds first-mode actors
    /// only, in the order that defines incidence rows.
    TwoMode {
        attributes: AttributeVector,
        mode: ModeInfo,
        incidence: Vec<IncidenceRecord>,
    },
}

/// Attribute values and their exposure, paired by actor index.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureOutcome {
    pub attributes: AttributeVector,
    pub exposure: ExposureVector,
}

impl ExposureOutcome {
    /// Report lines in actor order.
    pub fn rows(&self) -> Vec<ExposureRow> {
        self.attributes
            .iter()
            .zip(self.exposure.as_slice())
            .map(|(rec, &exposure)| ExposureRow {
                actor_id: rec.id,
                attribute: rec.value,
                exposure,
            })
            .collect()
    }
}

/// Run the pipeline selected by `request`.
pub fn compute_exposure(request: ExposureRequest) -> Result<ExposureOutcome> {
    match request {
        ExposureRequest::OneMode { attributes, edges } => {
            let n = attributes.len();
            tracing::debug!(actors = n, edges = edges.len(), "one-mode exposure");

            let relation = build_relation_matrix(n, edges)?;
            let exposure = reduce(&relation, &attributes.values())?;
            Ok(ExposureOutcome { attributes, exposure })
        }
        ExposureRequest::TwoMode { attributes, mode, incidence } => {
            if attributes.len() != mode.first_mode {
                return Err(Error::DimensionMismatch {
                    what: "first-mode attribute count".into(),
                    expected: mode.first_mode,
                    got: attributes.len(),
                });
            }
            tracing::debug!(
                actors = mode.first_mode,
                affiliations = mode.second_mode,
                memberships = incidence.len(),
                "two-mode exposure"
            );

            let a = build_incidence_matrix(&mode, incidence)?;
            let projection = project(&a, &mode)?;
            drop(a);
            let exposure = reduce(projection.projected.matrix(), &attributes.values())?;
            Ok(ExposureOutcome { attributes, exposure })
        }
    }
}
