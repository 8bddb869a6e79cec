#![deny(unsafe_code)]

//! Convenience wrapper binding one source and one revision to the
//! lookup operations.

use gb2260_model::{CodeError, Division, Revision};

use crate::error::StandardsError;
use crate::registry::DivisionRegistry;

/// One chosen revision of one source, ready to query. Pure delegation
/// to the underlying [`Revision`].
#[derive(Debug, Clone)]
pub struct Gb2260 {
    source: String,
    revision: Revision,
}

impl Gb2260 {
    /// Bind `revision` of `source`, or the source's latest revision
    /// when `None`.
    ///
    /// # Errors
    ///
    /// [`StandardsError::SourceNotFound`] /
    /// [`StandardsError::RevisionNotFound`] from the registry.
    pub fn new(
        registry: &DivisionRegistry,
        source: &str,
        revision: Option<&str>,
    ) -> Result<Self, StandardsError> {
        let source = registry.source(source)?;
        let revision = match revision {
            Some(name) => source.load_revision(name)?,
            None => source.load_latest()?,
        };
        Ok(Self {
            source: source.name().to_string(),
            revision,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn revision_name(&self) -> &str {
        self.revision.name()
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    pub fn get(&self, code: &str) -> Option<Division<'_>> {
        self.revision.get(code)
    }

    pub fn provinces(&self) -> Vec<Division<'_>> {
        self.revision.provinces()
    }

    /// # Errors
    ///
    /// Propagates [`CodeError`] from the code grammar.
    pub fn prefectures(&self, province_code: &str) -> Result<Vec<Division<'_>>, CodeError> {
        self.revision.prefectures(province_code)
    }

    /// # Errors
    ///
    /// Propagates [`CodeError`] from the code grammar.
    pub fn counties(&self, prefecture_code: &str) -> Result<Vec<Division<'_>>, CodeError> {
        self.revision.counties(prefecture_code)
    }

    /// # Errors
    ///
    /// Propagates [`CodeError`] from the code grammar.
    pub fn describe(&self, code: &str) -> Result<String, CodeError> {
        self.revision.describe(code)
    }
}
