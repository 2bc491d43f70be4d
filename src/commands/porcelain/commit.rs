use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

impl Repository {
    /// Snapshots the working directory and advances the active branch to a
    /// new commit whose parent is the branch's previous target.
    pub fn create_commit(&self, message: &str) -> Result<ObjectId> {
        self.ensure_initialized()?;
        let _lock = self.lock()?;

        self.commit_snapshot(message)
    }

    /// Caller holds the repository lock.
    pub(crate) fn commit_snapshot(&self, message: &str) -> Result<ObjectId> {
        let branch_name = self.refs().current_branch()?;
        let parent = self.refs().read_ref(&branch_name)?;

        if let Some(parent) = &parent
            && !self.database().contains(parent)
        {
            return Err(Error::ObjectNotFound(parent.clone()));
        }

        let tree_oid = self.tree_builder().snapshot(Path::new(""))?;
        let config = self.config()?;

        let commit = Commit::new(
            parent,
            tree_oid,
            config.committer_name().to_string(),
            Commit::generate_timestamp(),
            message.trim().to_string(),
        );
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_ref(&branch_name, Some(&commit_oid))?;

        info!(branch = %branch_name, commit = %commit_oid, "created commit");
        Ok(commit_oid)
    }

    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let commit_oid = self.create_commit(message)?;
        let commit = self.database().parse_object_as_commit(&commit_oid)?;
        let branch_name = self.refs().current_branch()?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch_name,
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
