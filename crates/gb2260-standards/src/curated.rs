#![deny(unsafe_code)]

//! The combined `curated` source.
//!
//! The raw sources disagree: the same revision label can appear in
//! more than one of them with different tables. The curated source
//! settles this with an explicit precedence order — a revision found
//! in an earlier layer shadows the same label in every later one. The
//! policy lives here, next to the registry assembly, never inside the
//! core lookup types.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use gb2260_model::DivisionTable;

use crate::error::StandardsError;
use crate::registry::DatasetProvider;

/// Precedence order for combining the raw sources, highest first.
pub const CURATED_PRECEDENCE: &[&str] = &["gb", "stats", "mca"];

/// Name the combined source is registered under.
pub const CURATED_SOURCE: &str = "curated";

/// Provider over an ordered stack of `(name, provider)` layers.
pub struct CuratedProvider {
    layers: Vec<(String, Arc<dyn DatasetProvider>)>,
}

impl CuratedProvider {
    /// `layers` in precedence order, highest first.
    pub fn new(layers: Vec<(String, Arc<dyn DatasetProvider>)>) -> Self {
        Self { layers }
    }
}

impl DatasetProvider for CuratedProvider {
    fn revisions(&self) -> Vec<String> {
        let mut all: BTreeSet<String> = BTreeSet::new();
        for (_, provider) in &self.layers {
            all.extend(provider.revisions());
        }
        // Revision labels are YYYYMM strings, so reverse label order
        // is newest first.
        all.into_iter().rev().collect()
    }

    fn load(&self, revision: &str) -> Result<Option<DivisionTable>, StandardsError> {
        for (name, provider) in &self.layers {
            if provider.revisions().iter().any(|known| known == revision) {
                debug!(layer = %name, revision, "curated revision resolved");
                return provider.load(revision);
            }
        }
        Ok(None)
    }
}

impl fmt::Debug for CuratedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<&str> = self.layers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("CuratedProvider")
            .field("layers", &layers)
            .finish()
    }
}
