//! Actors and their attribute values.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Actor identifier as it appears in the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub i64);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `(actorId, value)` row of an attribute file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub id: ActorId,
    pub value: f64,
}

impl AttributeRecord {
    pub fn new(id: ActorId, value: f64) -> Self {
        Self { id, value }
    }
}

/// Attribute values in input order. Position `i` is actor `i` in every
/// matrix built for the same file-pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AttributeVector {
    records: Vec<AttributeRecord>,
}

impl AttributeVector {
    /// Fails with `DuplicateActor` if an id occurs more than once, and with
    /// `InvalidAttribute` if a value is NaN or infinite.
    pub fn new(records: Vec<AttributeRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for rec in &records {
            if !rec.value.is_finite() {
                return Err(Error::InvalidAttribute { id: rec.id, value: rec.value });
            }
            if !seen.insert(rec.id) {
                return Err(Error::DuplicateActor { id: rec.id });
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AttributeRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// The bare values, index-aligned with the records.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }
}

impl<'a> IntoIterator for &'a AttributeVector {
    type Item = &'a AttributeRecord;
    type IntoIter = std::slice::Iter<'a, AttributeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
