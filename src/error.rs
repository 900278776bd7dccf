//! Error taxonomy shared by the crawler, the hierarchy builder and the serializer.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The crawl root cannot be walked at all.
    #[error("{root}: {reason}")]
    InvalidRoot { root: String, reason: String },

    /// A failure below the root aborted the walk.
    #[error("walk failed: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A malformed relative path reached the hierarchy builder.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("no wanted extensions given (input: {0:?})")]
    InvalidExtensions(String),

    #[error("failed to serialize hierarchy")]
    Serialization(#[from] serde_json::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_root(root: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidRoot {
            root: root.into(),
            reason: reason.into(),
        }
    }
}
