//! Repository-wide advisory lock
//!
//! Mutating commands hold an exclusive `file_guard` lock on `tig/lock` for
//! their whole duration; a second writer blocks until the first one is done.

use crate::errors::{IoResultExt, Result};
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;
use tracing::debug;

pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_path(path)?;

        debug!(path = %path.display(), "waiting for repository lock");
        let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1).with_path(path)?;

        Ok(RepositoryLock { _guard: guard })
    }
}

impl std::fmt::Debug for RepositoryLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryLock").finish_non_exhaustive()
    }
}
