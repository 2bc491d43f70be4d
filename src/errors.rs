//! Error taxonomy shared by the storage areas and the algorithms built on them.
//!
//! Porcelain commands wrap these in `anyhow` for reporting; everything below
//! the command layer returns [`Result`] so callers can match on the kind of
//! failure (a missing branch is recoverable, a vanished object is not).

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("tree entry not found: {0}")]
    EntryNotFound(String),

    #[error("branch {0} already exists")]
    BranchExists(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("unsupported file type at {0}")]
    UnsupportedFileType(PathBuf),

    #[error("invalid tree entry name: {0}")]
    InvalidEntryName(String),

    #[error("{resource} limit exceeded: requested {requested}, limit {limit}")]
    ResourceExceeded {
        resource: &'static str,
        limit: usize,
        requested: usize,
    },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid object type: {0}")]
    InvalidObjectType(String),

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    #[error("not a tig repository: {0}")]
    NotInitialized(PathBuf),

    #[error("repository already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Missing refs, objects and tree entries are reported to the user rather
    /// than treated as corruption.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ObjectNotFound(_) | Error::BranchNotFound(_) | Error::EntryNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// helper to wrap io errors with path context
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.into(),
            source,
        })
    }
}
