#![deny(unsafe_code)]

//! Source registry and revision loading.
//!
//! Datasets are located through an explicit registry constructed at
//! startup: each named source is backed by a [`DatasetProvider`] that
//! can list its revisions and hand over the code -> name table for any
//! one of them. A [`Source`] is the factory that binds such a table
//! into a [`Revision`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use gb2260_model::{DivisionTable, Revision};

use crate::error::StandardsError;

/// Supplies the per-revision division tables for one named dataset.
///
/// Implementations are immutable after construction and shareable
/// across threads.
pub trait DatasetProvider: Send + Sync {
    /// Revision names this dataset carries, newest first.
    fn revisions(&self) -> Vec<String>;

    /// The code -> name table for one revision, or `None` when the
    /// revision is unknown to this dataset.
    ///
    /// # Errors
    ///
    /// Backend failures (unreadable or malformed data files).
    fn load(&self, revision: &str) -> Result<Option<DivisionTable>, StandardsError>;
}

/// Provider over tables held in memory, newest revision first. Used in
/// tests and by callers that embed pre-generated data.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    revisions: Vec<(String, DivisionTable)>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a revision; call in newest-first order.
    #[must_use]
    pub fn with_revision(mut self, name: impl Into<String>, table: DivisionTable) -> Self {
        self.revisions.push((name.into(), table));
        self
    }
}

impl DatasetProvider for MemoryProvider {
    fn revisions(&self) -> Vec<String> {
        self.revisions.iter().map(|(name, _)| name.clone()).collect()
    }

    fn load(&self, revision: &str) -> Result<Option<DivisionTable>, StandardsError> {
        Ok(self
            .revisions
            .iter()
            .find(|(name, _)| name == revision)
            .map(|(_, table)| table.clone()))
    }
}

/// Explicit source-name -> provider map, constructed at startup and
/// injected wherever sources are resolved.
#[derive(Clone, Default)]
pub struct DivisionRegistry {
    providers: BTreeMap<String, Arc<dyn DatasetProvider>>,
}

impl DivisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn DatasetProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Registered source names, in name order.
    pub fn source_names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    /// The raw provider for a source, if registered.
    pub fn provider(&self, name: &str) -> Option<Arc<dyn DatasetProvider>> {
        self.providers.get(name).map(Arc::clone)
    }

    /// Resolve a named source.
    ///
    /// # Errors
    ///
    /// [`StandardsError::SourceNotFound`] when nothing is registered
    /// under `name`.
    pub fn source(&self, name: &str) -> Result<Source, StandardsError> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| StandardsError::SourceNotFound {
                name: name.to_string(),
            })?;
        Ok(Source {
            name: name.to_string(),
            provider: Arc::clone(provider),
        })
    }
}

impl fmt::Debug for DivisionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DivisionRegistry")
            .field("sources", &self.source_names())
            .finish()
    }
}

/// Factory for [`Revision`]s of one named dataset. Holds no division
/// data itself.
#[derive(Clone)]
pub struct Source {
    name: String,
    provider: Arc<dyn DatasetProvider>,
}

impl Source {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Revision names, newest first.
    pub fn all_revisions(&self) -> Vec<String> {
        self.provider.revisions()
    }

    /// Head of [`Source::all_revisions`].
    pub fn latest_revision(&self) -> Option<String> {
        self.all_revisions().into_iter().next()
    }

    /// Bind the provider's table for `revision` into a [`Revision`],
    /// verbatim.
    ///
    /// # Errors
    ///
    /// [`StandardsError::RevisionNotFound`] when the provider has no
    /// such revision; backend errors pass through.
    pub fn load_revision(&self, revision: &str) -> Result<Revision, StandardsError> {
        let table =
            self.provider
                .load(revision)?
                .ok_or_else(|| StandardsError::RevisionNotFound {
                    provider: self.name.clone(),
                    revision: revision.to_string(),
                })?;
        debug!(
            source = %self.name,
            revision,
            entries = table.len(),
            "loaded revision"
        );
        Ok(Revision::new(revision, table))
    }

    /// Load the newest revision.
    ///
    /// # Errors
    ///
    /// [`StandardsError::NoRevisions`] when the source is empty.
    pub fn load_latest(&self) -> Result<Revision, StandardsError> {
        let revision = self
            .latest_revision()
            .ok_or_else(|| StandardsError::NoRevisions {
                provider: self.name.clone(),
            })?;
        self.load_revision(&revision)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish()
    }
}
