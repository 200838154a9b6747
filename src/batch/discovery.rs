//! Pair each network file in a directory with its attribute file.
//!
//! `net1.csv` pairs with `net1_y.csv` (one-mode) or `net1_y_mode.csv`
//! (two-mode). Files carrying the active kind's attribute suffix are never
//! treated as networks themselves; everything else ending in `.csv` is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::NetworkKind;
use crate::Result;

/// A network file and the attribute file it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePair {
    /// File name of the network file, used to label results and failures.
    pub name: String,
    pub network: PathBuf,
    pub attributes: PathBuf,
}

impl FilePair {
    /// A pair from explicit paths, labelled by the network file name.
    pub fn new(network: &Path, attributes: &Path) -> Self {
        let name = network
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| network.display().to_string());
        Self { name, network: network.to_path_buf(), attributes: attributes.to_path_buf() }
    }

    pub fn for_network(network: &Path, kind: &NetworkKind) -> Option<Self> {
        let name = network.file_name()?.to_str()?.to_string();
        let stem = network.file_stem()?.to_str()?;
        let attributes = network.with_file_name(format!("{stem}{}", kind.attribute_suffix()));
        Some(Self { name, network: network.to_path_buf(), attributes })
    }

    /// Whether the attribute file exists. Missing ones fail at load time.
    pub fn is_complete(&self) -> bool {
        self.attributes.is_file()
    }
}

fn is_attribute_file(name: &str, kind: &NetworkKind) -> bool {
    name.ends_with(kind.attribute_suffix())
}

/// All network files directly under `dir`, sorted by name.
pub fn discover_pairs(dir: &Path, kind: &NetworkKind) -> Result<Vec<FilePair>> {
    let mut pairs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(".csv") || is_attribute_file(name, kind) {
            continue;
        }
        if let Some(pair) = FilePair::for_network(&path, kind) {
            if !pair.is_complete() {
                tracing::warn!(pair = %pair.name, attributes = %pair.attributes.display(), "attribute file missing");
            }
            pairs.push(pair);
        }
    }
    pairs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pairs)
}
