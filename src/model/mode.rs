//! Network kinds and two-mode partition metadata.

use serde::{Deserialize, Serialize};

/// The shape of a network file, and how its attribute file is named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NetworkKind {
    /// Actor-to-actor relation.
    OneMode,
    /// Actor-to-affiliation membership. Rows of the mode attribute file whose
    /// mode field equals `first_mode_flag` are the actors of interest.
    TwoMode { first_mode_flag: String },
}

impl NetworkKind {
    /// Suffix that turns a network file stem into its attribute file name.
    pub fn attribute_suffix(&self) -> &'static str {
        match self {
            NetworkKind::OneMode => "_y.csv",
            NetworkKind::TwoMode { .. } => "_y_mode.csv",
        }
    }
}

/// Partition of a two-mode input: `first_mode` actors (`p`) and
/// `second_mode` affiliations (`q`). Fixed before any matrix is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub first_mode: usize,
    pub second_mode: usize,
    pub first_mode_flag: String,
}

impl ModeInfo {
    pub fn new(first_mode: usize, second_mode: usize, first_mode_flag: impl Into<String>) -> Self {
        Self {
            first_mode,
            second_mode,
            first_mode_flag: first_mode_flag.into(),
        }
    }

    /// Incidence matrix shape `(p, q)`.
    pub fn incidence_dims(&self) -> (usize, usize) {
        (self.first_mode, self.second_mode)
    }
}
