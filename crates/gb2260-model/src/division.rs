#![deny(unsafe_code)]

//! The resolved-division value object.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::code;
use crate::error::CodeError;
use crate::revision::Revision;

/// One resolved `(code, name)` entry viewed against the revision that
/// produced it. A cheap, copyable snapshot: it borrows from the owning
/// [`Revision`], which always outlives it, and re-derives every
/// hierarchy query through that revision rather than caching.
///
/// Identity is `(code, revision name)`; the name is metadata and takes
/// no part in equality or hashing.
#[derive(Clone, Copy)]
pub struct Division<'r> {
    code: &'r str,
    name: &'r str,
    revision: &'r Revision,
}

impl<'r> Division<'r> {
    pub(crate) fn new(code: &'r str, name: &'r str, revision: &'r Revision) -> Self {
        Self {
            code,
            name,
            revision,
        }
    }

    pub fn code(&self) -> &'r str {
        self.code
    }

    pub fn name(&self) -> &'r str {
        self.name
    }

    /// Name of the revision this division was resolved against.
    pub fn revision(&self) -> &'r str {
        self.revision.name()
    }

    pub fn is_province(&self) -> bool {
        code::is_province_level(self.code)
    }

    pub fn is_prefecture(&self) -> bool {
        code::is_prefecture_level(self.code)
    }

    pub fn is_county(&self) -> bool {
        code::is_county_level(self.code)
    }

    /// Province-level ancestor, re-resolved against the owning revision.
    ///
    /// # Errors
    ///
    /// Propagates [`CodeError`] from the code grammar.
    pub fn province(&self) -> Result<Option<Division<'r>>, CodeError> {
        self.revision.get_province(self.code)
    }

    /// Prefecture-level ancestor, `None` for province-level codes.
    ///
    /// # Errors
    ///
    /// Propagates [`CodeError`] from the code grammar.
    pub fn prefecture(&self) -> Result<Option<Division<'r>>, CodeError> {
        self.revision.get_prefecture(self.code)
    }

    /// Space-joined ancestor names down to this division's level.
    ///
    /// # Errors
    ///
    /// Propagates [`CodeError`] from the code grammar.
    pub fn description(&self) -> Result<String, CodeError> {
        self.revision.describe(self.code)
    }
}

impl fmt::Display for Division<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Division {} {} rev={}>",
            self.code,
            self.name,
            self.revision()
        )
    }
}

impl fmt::Debug for Division<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Division")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("revision", &self.revision())
            .finish()
    }
}

impl PartialEq for Division<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.code, self.revision()) == (other.code, other.revision())
    }
}

impl Eq for Division<'_> {}

impl Hash for Division<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.revision().hash(state);
    }
}
