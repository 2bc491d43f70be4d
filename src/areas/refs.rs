//! Branch references and HEAD
//!
//! Every branch is a file under `refs/` holding either a 40-hex commit id or
//! the literal `root`, which marks a branch that has no commit yet. HEAD is a
//! single line `refs/<branch>` naming the active branch.
//!
//! All writes go through a temporary file and a rename, so a concurrent
//! reader observes either the previous or the next value.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::write_atomically;
use crate::artifacts::objects::commit::ROOT_SENTINEL;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoResultExt, Result};
use derive_new::new;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Name of the file holding the active branch
pub const HEAD_REF_NAME: &str = "HEAD";

/// Directory prefix written into HEAD
const REFS_PREFIX: &str = "refs/";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (`tig`)
    path: Box<Path>,
}

impl Refs {
    /// Branch HEAD currently points at.
    pub fn current_branch(&self) -> Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path).with_path(head_path.to_path_buf())?;
        let content = content.trim_end_matches('\n');

        match content.strip_prefix(REFS_PREFIX) {
            Some(name) => BranchName::try_parse(name.to_string()),
            None => Err(Error::InvalidBranchName(content.to_string())),
        }
    }

    pub fn set_head(&self, branch_name: &BranchName) -> Result<()> {
        debug!(branch = %branch_name, "moving HEAD");
        write_atomically(
            &self.head_path(),
            format!("{REFS_PREFIX}{branch_name}\n").as_bytes(),
        )
    }

    /// Commit a branch points at; `None` for a branch still at `root`.
    pub fn read_ref(&self, branch_name: &BranchName) -> Result<Option<ObjectId>> {
        let ref_path = self.branch_path(branch_name);
        let content = match std::fs::read_to_string(&ref_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::BranchNotFound(branch_name.to_string()));
            }
            Err(e) => return Err(e).with_path(ref_path.to_path_buf()),
        };

        match content.trim() {
            ROOT_SENTINEL => Ok(None),
            oid => Ok(Some(ObjectId::try_parse(oid.to_string())?)),
        }
    }

    /// Commit the active branch points at.
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        self.read_ref(&self.current_branch()?)
    }

    /// Unconditionally points `branch_name` at `oid`, creating the ref if needed.
    pub fn update_ref(&self, branch_name: &BranchName, oid: Option<&ObjectId>) -> Result<()> {
        let raw_ref = match oid {
            Some(oid) => oid.as_ref().to_string(),
            None => ROOT_SENTINEL.to_string(),
        };
        debug!(branch = %branch_name, target = %raw_ref, "updating ref");

        write_atomically(
            &self.branch_path(branch_name),
            format!("{raw_ref}\n").as_bytes(),
        )
    }

    /// Advances whatever branch HEAD names.
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        self.update_ref(&self.current_branch()?, Some(oid))
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: Option<&ObjectId>) -> Result<()> {
        // check whether another branch with the same name already exists
        if self.branch_path(name).exists() {
            return Err(Error::BranchExists(name.to_string()));
        }

        self.update_ref(name, source_oid)
    }

    /// All branches, sorted by name. Nested names come back `/`-joined.
    pub fn list_branches(&self) -> Result<Vec<BranchName>> {
        let refs_path = self.refs_path();
        let mut branches = Vec::new();

        for entry in WalkDir::new(&refs_path) {
            let entry = entry.map_err(|e| Error::Io {
                path: e.path().unwrap_or(&refs_path).to_path_buf(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative_path) = entry.path().strip_prefix(&refs_path) else {
                continue;
            };
            let name = relative_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            // temporaries from an interrupted write fail validation
            if let Ok(branch) = BranchName::try_parse(name) {
                branches.push(branch);
            }
        }

        branches.sort();
        Ok(branches)
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.refs_path().join(branch_name.as_ref()).into_boxed_path()
    }
}
