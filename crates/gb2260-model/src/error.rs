#![deny(unsafe_code)]

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// The input fails the six-digit grammar, or a pattern builder was
    /// handed a code that is not at the level it requires.
    #[error("invalid division code: {code:?}")]
    Invalid { code: String },

    /// The input passes the grammar but is structurally inconsistent
    /// (a populated field below a zeroed one), or asks for a
    /// derivation that does not exist at its level.
    #[error("inconsistent division code {code}: {message}")]
    Inconsistent { code: String, message: String },
}

impl CodeError {
    pub(crate) fn invalid(code: &str) -> Self {
        Self::Invalid {
            code: code.to_string(),
        }
    }

    pub(crate) fn inconsistent(code: &str, message: &str) -> Self {
        Self::Inconsistent {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}
