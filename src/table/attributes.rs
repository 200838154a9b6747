//! Attribute files.

use std::io::BufRead;
use std::path::Path;

use crate::model::{ActorId, AttributeRecord, AttributeVector, ModeInfo};
use crate::Result;
use super::{open, read_rows, source_label, ActorIndex, TableOptions};

/// Parse `actorId, value` rows. Row order defines actor positions.
pub fn parse_attributes<R: BufRead>(reader: R, source: &str, opts: &TableOptions) -> Result<AttributeVector> {
    let records = read_rows(reader, opts)?
        .iter()
        .map(|row| {
            Ok(AttributeRecord::new(
                row.actor_id(0, "actor id", source)?,
                row.number(1, "attribute value", source)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    AttributeVector::new(records)
}

pub fn read_attributes(path: &Path, opts: &TableOptions) -> Result<AttributeVector> {
    parse_attributes(open(path)?, &source_label(path), opts)
}

/// A parsed two-mode attribute file.
#[derive(Debug, Clone)]
pub struct ModeTable {
    /// First-mode actors with their values, in file order.
    pub attributes: AttributeVector,
    /// Second-mode ids in file order.
    pub affiliations: Vec<ActorId>,
    pub mode: ModeInfo,
}

impl ModeTable {
    pub fn actor_index(&self) -> Result<ActorIndex> {
        ActorIndex::from_ids(self.attributes.ids(), "actor")
    }

    pub fn affiliation_index(&self) -> Result<ActorIndex> {
        ActorIndex::from_ids(self.affiliations.iter().copied(), "affiliation")
    }
}

/// Parse `id, value, mode` rows. Rows whose mode equals `first_mode_flag`
/// are first-mode actors; every other row is an affiliation.
pub fn parse_mode_attributes<R: BufRead>(
    reader: R,
    source: &str,
    opts: &TableOptions,
    first_mode_flag: &str,
) -> Result<ModeTable> {
    let mut actors = Vec::new();
    let mut affiliations = Vec::new();

    for row in read_rows(reader, opts)? {
        let id = row.actor_id(0, "id", source)?;
        if row.field(2, "mode", source)? == first_mode_flag {
            actors.push(AttributeRecord::new(id, row.number(1, "attribute value", source)?));
        } else {
            affiliations.push(id);
        }
    }

    let mode = ModeInfo::new(actors.len(), affiliations.len(), first_mode_flag);
    Ok(ModeTable {
        attributes: AttributeVector::new(actors)?,
        affiliations,
        mode,
    })
}

pub fn read_mode_attributes(path: &Path, opts: &TableOptions, first_mode_flag: &str) -> Result<ModeTable> {
    parse_mode_attributes(open(path)?, &source_label(path), opts, first_mode_flag)
}
