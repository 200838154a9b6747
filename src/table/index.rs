//! Actor id → matrix position lookup.

use hashbrown::HashMap;

use crate::model::ActorId;
use crate::{Error, Result};

/// Positions of ids in file order. `role` names the id set in errors
/// ("actor", "affiliation").
#[derive(Debug, Clone)]
pub struct ActorIndex {
    positions: HashMap<ActorId, usize>,
    role: &'static str,
}

impl ActorIndex {
    pub fn from_ids<I>(ids: I, role: &'static str) -> Result<Self>
    where
        I: IntoIterator<Item = ActorId>,
    {
        let mut positions = HashMap::new();
        for (pos, id) in ids.into_iter().enumerate() {
            if positions.insert(id, pos).is_some() {
                return Err(Error::DuplicateActor { id });
            }
        }
        Ok(Self { positions, role })
    }

    pub fn resolve(&self, id: ActorId) -> Result<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or_else(|| Error::UnknownActor { id, role: self.role })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
