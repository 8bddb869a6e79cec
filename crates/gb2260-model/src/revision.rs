#![deny(unsafe_code)]

//! One immutable snapshot of the division standard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::code;
use crate::division::Division;
use crate::error::CodeError;

/// Code -> name mapping for one revision. Keys are unique; no ordering
/// is guaranteed to callers, although the backing map is code-ordered.
pub type DivisionTable = BTreeMap<String, String>;

/// A named revision of the division standard, resolved entirely in
/// memory. Immutable after construction; multiple revisions coexist
/// without interaction and may be shared freely across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revision {
    name: String,
    table: DivisionTable,
}

impl Revision {
    pub fn new(name: impl Into<String>, table: DivisionTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw code -> name table.
    pub fn table(&self) -> &DivisionTable {
        &self.table
    }

    /// Exact lookup. An absent code is a normal `None`, never an error.
    pub fn get(&self, code: &str) -> Option<Division<'_>> {
        let (code, name) = self.table.get_key_value(code)?;
        Some(Division::new(code, name, self))
    }

    /// All province-level entries in this revision.
    pub fn provinces(&self) -> Vec<Division<'_>> {
        self.table
            .iter()
            .filter(|(code, _)| code::is_province_level(code))
            .map(|(code, name)| Division::new(code, name, self))
            .collect()
    }

    /// Prefecture-level entries directly under `province_code`. Empty
    /// when this revision carries none.
    ///
    /// # Errors
    ///
    /// [`CodeError::Invalid`] unless `province_code` is province-level.
    pub fn prefectures(&self, province_code: &str) -> Result<Vec<Division<'_>>, CodeError> {
        let pattern = code::prefecture_pattern(province_code)?;
        Ok(self
            .table
            .iter()
            .filter(|(code, _)| pattern.matches(code))
            .map(|(code, name)| Division::new(code, name, self))
            .collect())
    }

    /// County-level entries directly under `prefecture_code`.
    ///
    /// # Errors
    ///
    /// [`CodeError::Invalid`] unless `prefecture_code` is
    /// prefecture-level.
    pub fn counties(&self, prefecture_code: &str) -> Result<Vec<Division<'_>>, CodeError> {
        let pattern = code::county_pattern(prefecture_code)?;
        Ok(self
            .table
            .iter()
            .filter(|(code, _)| pattern.matches(code))
            .map(|(code, name)| Division::new(code, name, self))
            .collect())
    }

    /// The province-level ancestor of `code`, if present in this
    /// revision.
    ///
    /// # Errors
    ///
    /// Propagates [`code::to_province_code`] failures.
    pub fn get_province(&self, code: &str) -> Result<Option<Division<'_>>, CodeError> {
        let province_code = code::to_province_code(code)?;
        Ok(self.get(&province_code))
    }

    /// The prefecture-level ancestor of `code`, if any.
    ///
    /// A province-level or hierarchy-inconsistent code has no
    /// prefecture; that is a legitimate `None`, not a failure.
    ///
    /// # Errors
    ///
    /// [`CodeError::Invalid`] on bad grammar.
    pub fn get_prefecture(&self, code: &str) -> Result<Option<Division<'_>>, CodeError> {
        match code::to_prefecture_code(code) {
            Ok(prefecture_code) => Ok(self.get(&prefecture_code)),
            Err(CodeError::Inconsistent { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Space-joined chain of ancestor names from province down to the
    /// code's own level. Ancestors absent from this revision are
    /// skipped; the empty string means nothing resolved.
    ///
    /// # Errors
    ///
    /// [`CodeError::Invalid`] on bad grammar.
    pub fn describe(&self, code: &str) -> Result<String, CodeError> {
        let ancestors = code::split(code)?;
        let names: Vec<&str> = ancestors
            .iter()
            .filter_map(|part| self.table.get(part))
            .map(String::as_str)
            .collect();
        Ok(names.join(" "))
    }
}
