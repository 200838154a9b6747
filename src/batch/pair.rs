//! Load and compute one file-pair.

use crate::config::BatchConfig;
use crate::engine::{compute_exposure, ExposureRequest};
use crate::model::NetworkKind;
use crate::report::{save_exposure_table, ExposureReport};
use crate::table::{self, ActorIndex, TableOptions};
use crate::Result;
use super::FilePair;

/// Read both files of `pair` into an engine request.
pub fn load_request(pair: &FilePair, kind: &NetworkKind, opts: &TableOptions) -> Result<ExposureRequest> {
    match kind {
        NetworkKind::OneMode => {
            let attributes = table::read_attributes(&pair.attributes, opts)?;
            let actors = ActorIndex::from_ids(attributes.ids(), "actor")?;
            let edges = table::read_edges(&pair.network, opts, &actors)?;
            Ok(ExposureRequest::OneMode { attributes, edges })
        }
        NetworkKind::TwoMode { first_mode_flag } => {
            let modes = table::read_mode_attributes(&pair.attributes, opts, first_mode_flag)?;
            let incidence = table::read_incidence(
                &pair.network,
                opts,
                &modes.actor_index()?,
                &modes.affiliation_index()?,
            )?;
            Ok(ExposureRequest::TwoMode {
                attributes: modes.attributes,
                mode: modes.mode,
                incidence,
            })
        }
    }
}

/// Load, compute and (optionally) save one pair. Errors are unlabelled;
/// the runner attaches the pair name.
pub fn run_pair(pair: &FilePair, config: &BatchConfig) -> Result<ExposureReport> {
    let request = load_request(pair, &config.kind, &config.table_options())?;
    let outcome = compute_exposure(request)?;
    let report = ExposureReport::from_outcome(&pair.name, &outcome);
    if let Some(dir) = &config.output_dir {
        let path = save_exposure_table(&report, dir)?;
        tracing::debug!(pair = %pair.name, path = %path.display(), "wrote exposure table");
    }
    Ok(report)
}
