//! Exposure results.

use serde::{Deserialize, Serialize};
use super::ActorId;

/// One exposure value per actor, index-aligned with the attribute vector
/// it was computed from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExposureVector(Vec<f64>);

impl ExposureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// `actorId, attributeValue, exposureValue` — one reported line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureRow {
    pub actor_id: ActorId,
    pub attribute: f64,
    pub exposure: f64,
}
