#![deny(unsafe_code)]

//! TSV ingestion for generated revision files.
//!
//! A revision file is tab-separated with one header line; the division
//! code sits in the third column and the UTF-8 name in the fourth.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use gb2260_model::DivisionTable;

use crate::error::StandardsError;
use crate::registry::DatasetProvider;

/// Parse one revision file into a code -> name table.
///
/// # Errors
///
/// [`StandardsError::Io`] when the file cannot be read,
/// [`StandardsError::Tsv`] on malformed rows.
pub fn load_revision_table(path: &Path) -> Result<DivisionTable, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let mut table = DivisionTable::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| StandardsError::tsv(path, e.to_string()))?;
        let code = row.get(2).ok_or_else(|| {
            StandardsError::tsv(path, format!("row {} has no code column", index + 2))
        })?;
        let name = row.get(3).ok_or_else(|| {
            StandardsError::tsv(path, format!("row {} has no name column", index + 2))
        })?;
        table.insert(code.to_string(), name.to_string());
    }
    Ok(table)
}

/// Serves `<revision>.tsv` files from one directory, lazily per
/// request.
#[derive(Debug, Clone)]
pub struct TsvProvider {
    dir: PathBuf,
    revisions: Vec<String>,
}

impl TsvProvider {
    /// `revisions` in any order; revision labels sort newest-first
    /// lexicographically (they are `YYYYMM` strings).
    pub fn new(dir: impl Into<PathBuf>, mut revisions: Vec<String>) -> Self {
        revisions.sort_by(|a, b| b.cmp(a));
        Self {
            dir: dir.into(),
            revisions,
        }
    }

    fn revision_path(&self, revision: &str) -> PathBuf {
        self.dir.join(format!("{revision}.tsv"))
    }
}

impl DatasetProvider for TsvProvider {
    fn revisions(&self) -> Vec<String> {
        self.revisions.clone()
    }

    fn load(&self, revision: &str) -> Result<Option<DivisionTable>, StandardsError> {
        if !self.revisions.iter().any(|known| known == revision) {
            return Ok(None);
        }
        load_revision_table(&self.revision_path(revision)).map(Some)
    }
}
