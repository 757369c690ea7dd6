use std::path::PathBuf;

use thiserror::Error;

use crate::object::{FrameError, Id, ParseIdError};

use super::config::ConfigError;

/// Describes the potential error conditions that might arise from `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No `.git` directory was found at (or, when searching, above) the path.
    #[error("not a git repository (or any of the parent directories): {0}")]
    NotARepository(PathBuf),

    #[error("unsupported repository format version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: i64 },

    #[error("git config file {path} is missing or malformed: {reason}")]
    ConfigMissingOrMalformed { path: PathBuf, reason: String },

    #[error("{0} is not an empty directory")]
    TargetNotEmpty(PathBuf),

    #[error("{0} is not a directory")]
    TargetNotADirectory(PathBuf),

    #[error("object {0} not found")]
    ObjectNotFound(Id),

    /// The loose object file exists but could not be decompressed.
    #[error("object {id} is corrupt: {source}")]
    CorruptObject {
        id: Id,
        #[source]
        source: std::io::Error,
    },

    /// The loose object decompressed cleanly but its frame is invalid.
    #[error("object {id} is malformed: {source}")]
    MalformedObjectFrame {
        id: Id,
        #[source]
        source: FrameError,
    },

    #[error("invalid object ID `{value}`: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIdError,
    },

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(path: PathBuf, err: ConfigError) -> Error {
        Error::ConfigMissingOrMalformed {
            path,
            reason: err.to_string(),
        }
    }
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
