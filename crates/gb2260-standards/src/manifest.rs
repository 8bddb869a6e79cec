#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::StandardsError;

/// `manifest.json`: which revisions each raw source ships.
///
/// The file is a flat object, source name -> revision list:
///
/// ```json
/// {"gb": ["200212", "198012"], "stats": ["200212"], "mca": []}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub sources: BTreeMap<String, Vec<String>>,
}

impl Manifest {
    /// # Errors
    ///
    /// [`StandardsError::Io`] when the file cannot be read,
    /// [`StandardsError::Json`] when it is not the expected shape.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| StandardsError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Revisions listed for `source`; empty when the source is absent.
    pub fn revisions(&self, source: &str) -> &[String] {
        self.sources.get(source).map_or(&[], Vec::as_slice)
    }
}
