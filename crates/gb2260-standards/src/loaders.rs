#![deny(unsafe_code)]

//! Registry assembly over a generated data directory.
//!
//! Layout, as produced by the data build tooling: `manifest.json` at
//! the root, the `gb` revision files next to it, every other source in
//! a subdirectory named after it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::curated::{CURATED_PRECEDENCE, CURATED_SOURCE, CuratedProvider};
use crate::error::StandardsError;
use crate::manifest::Manifest;
use crate::registry::DivisionRegistry;
use crate::tsv::TsvProvider;

const DATA_ENV_VAR: &str = "GB2260_DATA_DIR";

/// The data directory from the `GB2260_DATA_DIR` environment variable,
/// if set.
pub fn default_data_root() -> Option<PathBuf> {
    std::env::var_os(DATA_ENV_VAR).map(PathBuf::from)
}

/// Build a registry over `data_dir`: one TSV-backed source per
/// manifest entry, plus the combined `curated` source over the
/// precedence layers that are present.
///
/// # Errors
///
/// Manifest read/parse failures. Revision files themselves are only
/// touched on load.
pub fn registry_from_data_dir(data_dir: &Path) -> Result<DivisionRegistry, StandardsError> {
    let manifest = Manifest::load(&data_dir.join("manifest.json"))?;

    let mut registry = DivisionRegistry::new();
    for (source, revisions) in &manifest.sources {
        let dir = if source == "gb" {
            data_dir.to_path_buf()
        } else {
            data_dir.join(source)
        };
        info!(source = %source, revisions = revisions.len(), "registered dataset source");
        registry.register(
            source.clone(),
            Arc::new(TsvProvider::new(dir, revisions.clone())),
        );
    }

    let layers: Vec<_> = CURATED_PRECEDENCE
        .iter()
        .filter_map(|name| {
            registry
                .provider(name)
                .map(|provider| ((*name).to_string(), provider))
        })
        .collect();
    if !layers.is_empty() {
        registry.register(CURATED_SOURCE, Arc::new(CuratedProvider::new(layers)));
    }

    Ok(registry)
}
