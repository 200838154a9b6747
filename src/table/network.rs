//! Network files.

use std::io::BufRead;
use std::path::Path;

use crate::model::{EdgeRecord, IncidenceRecord};
use crate::Result;
use super::{open, read_rows, source_label, ActorIndex, TableOptions};

/// Parse `fromId, toId[, weight]` rows into positional edges.
pub fn parse_edges<R: BufRead>(
    reader: R,
    source: &str,
    opts: &TableOptions,
    actors: &ActorIndex,
) -> Result<Vec<EdgeRecord>> {
    read_rows(reader, opts)?
        .iter()
        .map(|row| {
            let from = actors.resolve(row.actor_id(0, "source id", source)?)?;
            let to = actors.resolve(row.actor_id(1, "target id", source)?)?;
            Ok(EdgeRecord::new(from, to, row.weight_or_one(2, source)?))
        })
        .collect()
}

pub fn read_edges(path: &Path, opts: &TableOptions, actors: &ActorIndex) -> Result<Vec<EdgeRecord>> {
    parse_edges(open(path)?, &source_label(path), opts, actors)
}

/// Parse `actorId, affiliationId[, weight]` rows into positional memberships.
pub fn parse_incidence<R: BufRead>(
    reader: R,
    source: &str,
    opts: &TableOptions,
    actors: &ActorIndex,
    affiliations: &ActorIndex,
) -> Result<Vec<IncidenceRecord>> {
    read_rows(reader, opts)?
        .iter()
        .map(|row| {
            let actor = actors.resolve(row.actor_id(0, "actor id", source)?)?;
            let affiliation = affiliations.resolve(row.actor_id(1, "affiliation id", source)?)?;
            Ok(IncidenceRecord::new(actor, affiliation, row.weight_or_one(2, source)?))
        })
        .collect()
}

pub fn read_incidence(
    path: &Path,
    opts: &TableOptions,
    actors: &ActorIndex,
    affiliations: &ActorIndex,
) -> Result<Vec<IncidenceRecord>> {
    parse_incidence(open(path)?, &source_label(path), opts, actors, affiliations)
}
