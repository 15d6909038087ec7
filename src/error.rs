//! Error types for wordladder.

use std::path::PathBuf;

/// Errors raised by snapshot I/O, the codec and configuration loading.
///
/// Graph traversal itself never fails: an absent word or an unreachable
/// target is reported through `Option`/empty results, not through this type.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode word graph: {0}")]
    Encode(#[source] bincode::Error),

    #[error("malformed word graph snapshot: {0}")]
    Decode(#[source] bincode::Error),

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LadderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LadderError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LadderError>;
