#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("no dataset source registered under name {name:?}")]
    SourceNotFound { name: String },

    #[error("source {provider:?} carries no revision {revision:?}")]
    RevisionNotFound { provider: String, revision: String },

    #[error("source {provider:?} carries no revisions at all")]
    NoRevisions { provider: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON manifest {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TSV {path}: {message}")]
    Tsv { path: PathBuf, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn tsv(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Tsv {
            path: path.into(),
            message: message.into(),
        }
    }
}
