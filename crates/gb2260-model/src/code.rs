#![deny(unsafe_code)]

//! Fixed-width grammar for division codes.
//!
//! A code is exactly six ASCII digits: province in digits 1-2,
//! prefecture in digits 3-4, county in digits 5-6. A zeroed field
//! means "no division at this level", so `320000` is a province,
//! `320200` a prefecture and `320203` a county. All field arithmetic
//! lives here; the rest of the workspace reasons about codes only
//! through these operations.

use crate::error::CodeError;

/// Length of a division code in bytes.
pub const CODE_LEN: usize = 6;

/// True iff `code` is exactly six ASCII digits.
pub fn validate(code: &str) -> bool {
    code.len() == CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// The three two-digit fields of a grammar-valid code.
fn fields(code: &str) -> Option<(&str, &str, &str)> {
    if !validate(code) {
        return None;
    }
    Some((&code[0..2], &code[2..4], &code[4..6]))
}

/// True iff the code is structurally consistent: the province field is
/// populated and no populated field sits below a zeroed one. Codes like
/// `000203` (province missing) or `320003` (county without prefecture)
/// fail this even though they pass the digit grammar.
fn is_consistent(code: &str) -> bool {
    match fields(code) {
        Some((province, prefecture, county)) => {
            province != "00" && !(prefecture == "00" && county != "00")
        }
        None => false,
    }
}

/// True iff `code` is a consistent province-level code (`PP0000`).
pub fn is_province_level(code: &str) -> bool {
    matches!(fields(code), Some((p, q, c)) if p != "00" && q == "00" && c == "00")
}

/// True iff `code` is a consistent prefecture-level code (`PPQQ00`).
pub fn is_prefecture_level(code: &str) -> bool {
    matches!(fields(code), Some((p, q, c)) if p != "00" && q != "00" && c == "00")
}

/// True iff `code` is a consistent county-level code (`PPQQCC`).
pub fn is_county_level(code: &str) -> bool {
    matches!(fields(code), Some((p, q, c)) if p != "00" && q != "00" && c != "00")
}

/// The province-level ancestor of `code` (the code itself when it is
/// already province-level).
///
/// # Errors
///
/// [`CodeError::Invalid`] on bad grammar, [`CodeError::Inconsistent`]
/// when the code violates hierarchy consistency.
pub fn to_province_code(code: &str) -> Result<String, CodeError> {
    let (province, _, _) = fields(code).ok_or_else(|| CodeError::invalid(code))?;
    if !is_consistent(code) {
        return Err(CodeError::inconsistent(code, "no province to derive"));
    }
    Ok(format!("{province}0000"))
}

/// The prefecture-level ancestor of `code` (the code itself when it is
/// already prefecture-level).
///
/// # Errors
///
/// [`CodeError::Invalid`] on bad grammar; [`CodeError::Inconsistent`]
/// when the code violates hierarchy consistency or is province-level
/// and therefore has no prefecture part.
pub fn to_prefecture_code(code: &str) -> Result<String, CodeError> {
    let (province, prefecture, _) = fields(code).ok_or_else(|| CodeError::invalid(code))?;
    if !is_consistent(code) {
        return Err(CodeError::inconsistent(code, "no prefecture to derive"));
    }
    if prefecture == "00" {
        return Err(CodeError::inconsistent(code, "code has no prefecture part"));
    }
    Ok(format!("{province}{prefecture}00"))
}

/// Matches the prefecture-level codes directly under one province.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefecturePattern {
    province: String,
}

impl PrefecturePattern {
    pub fn matches(&self, code: &str) -> bool {
        is_prefecture_level(code) && code.starts_with(&self.province)
    }
}

/// Builds a matcher for the prefecture-level children of
/// `province_code`.
///
/// # Errors
///
/// [`CodeError::Invalid`] unless `province_code` is itself a
/// province-level code.
pub fn prefecture_pattern(province_code: &str) -> Result<PrefecturePattern, CodeError> {
    if !is_province_level(province_code) {
        return Err(CodeError::invalid(province_code));
    }
    Ok(PrefecturePattern {
        province: province_code[0..2].to_string(),
    })
}

/// Matches the county-level codes directly under one prefecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyPattern {
    prefix: String,
}

impl CountyPattern {
    pub fn matches(&self, code: &str) -> bool {
        is_county_level(code) && code.starts_with(&self.prefix)
    }
}

/// Builds a matcher for the county-level children of `prefecture_code`.
///
/// # Errors
///
/// [`CodeError::Invalid`] unless `prefecture_code` is itself a
/// prefecture-level code.
pub fn county_pattern(prefecture_code: &str) -> Result<CountyPattern, CodeError> {
    if !is_prefecture_level(prefecture_code) {
        return Err(CodeError::invalid(prefecture_code));
    }
    Ok(CountyPattern {
        prefix: prefecture_code[0..4].to_string(),
    })
}

/// Ancestor codes of a division code, inclusive of the code itself at
/// its own level. Levels below the code's own level are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorCodes {
    pub province: String,
    pub prefecture: Option<String>,
    pub county: Option<String>,
}

impl AncestorCodes {
    /// The present codes, province first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.province.as_str())
            .chain(self.prefecture.as_deref())
            .chain(self.county.as_deref())
    }
}

/// Decomposes a grammar-valid code into its ancestor codes.
///
/// Only the digit grammar is checked here: a hierarchy-inconsistent
/// code such as `000203` decomposes without complaint. Callers that
/// need consistency enforced go through [`to_province_code`] first.
///
/// # Errors
///
/// [`CodeError::Invalid`] on bad grammar.
pub fn split(code: &str) -> Result<AncestorCodes, CodeError> {
    let (province, prefecture, county) = fields(code).ok_or_else(|| CodeError::invalid(code))?;
    Ok(AncestorCodes {
        province: format!("{province}0000"),
        prefecture: (prefecture != "00").then(|| format!("{province}{prefecture}00")),
        county: (county != "00").then(|| code.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::{is_consistent, is_county_level, is_prefecture_level, is_province_level, validate};

    #[test]
    fn grammar_accepts_six_digits_only() {
        for code in ["000000", "320000", "320200", "320203"] {
            assert!(validate(code), "{code} should pass the grammar");
        }
        for code in ["", "32", "1234567", "ab0000", "32020 ", "３２０００0"] {
            assert!(!validate(code), "{code:?} should fail the grammar");
        }
    }

    #[test]
    fn consistency_requires_populated_ancestors() {
        for code in ["320000", "320200", "320203"] {
            assert!(is_consistent(code), "{code} should be consistent");
        }
        for code in ["000000", "000203", "000003", "320003"] {
            assert!(!is_consistent(code), "{code} should be inconsistent");
        }
    }

    #[test]
    fn levels_are_exclusive() {
        assert!(is_province_level("320000"));
        assert!(!is_province_level("000000"));
        assert!(!is_province_level("320200"));

        assert!(is_prefecture_level("320200"));
        assert!(!is_prefecture_level("320000"));
        assert!(!is_prefecture_level("320203"));

        assert!(is_county_level("320203"));
        assert!(!is_county_level("320200"));
        assert!(!is_county_level("320003"));
    }
}
