use crate::areas::config::Config;
use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoResultExt, Result};
use anyhow::Context;
use std::io::Write;
use tracing::info;

/// Message of the commit every repository starts from
pub const INITIAL_COMMIT_MESSAGE: &str = "init";

impl Repository {
    /// Creates the control directory, points `master` at a first snapshot of
    /// the working directory and makes it the active branch.
    pub fn initialize(&self, committer_name: &str) -> Result<ObjectId> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized(self.path().to_path_buf()));
        }
        let config = Config::new(committer_name, self.path())?;

        let control_path = self.control_path();
        std::fs::create_dir_all(&control_path).with_path(&control_path)?;
        let _lock = self.lock()?;

        // another init may have finished while we waited for the lock
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized(self.path().to_path_buf()));
        }

        let objects_path = self.database().objects_path();
        std::fs::create_dir_all(objects_path).with_path(objects_path)?;
        let refs_path = self.refs().refs_path();
        std::fs::create_dir_all(&refs_path).with_path(refs_path.to_path_buf())?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs().update_ref(&default_branch, None)?;
        config.write(&self.config_path())?;
        self.refs().set_head(&default_branch)?;

        let commit_oid = self.commit_snapshot(INITIAL_COMMIT_MESSAGE)?;
        info!(path = %self.path().display(), commit = %commit_oid, "initialized repository");

        Ok(commit_oid)
    }

    pub fn init(&mut self, committer_name: &str) -> anyhow::Result<()> {
        let commit_oid = self
            .initialize(committer_name)
            .context("failed to initialize repository")?;

        writeln!(
            self.writer(),
            "Initialized tig repository in {} [{} {}]",
            self.path().display(),
            DEFAULT_BRANCH,
            commit_oid.to_short_oid()
        )?;

        Ok(())
    }
}
