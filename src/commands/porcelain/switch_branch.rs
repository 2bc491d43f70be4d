use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::materializer::MaterializeReport;
use crate::errors::Result;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

impl Repository {
    /// Writes the tree of `name`'s commit over the working directory, then
    /// makes `name` the active branch.
    ///
    /// Tracked files are overwritten without checking for uncommitted edits.
    /// Files the target tree does not mention are left in place. On failure
    /// HEAD is unchanged.
    pub fn switch_to_branch(&self, name: &str) -> Result<MaterializeReport> {
        self.ensure_initialized()?;
        let branch_name = BranchName::try_parse(name.to_string())?;
        let _lock = self.lock()?;

        let report = match self.refs().read_ref(&branch_name)? {
            Some(commit_oid) => {
                let commit = self.database().parse_object_as_commit(&commit_oid)?;
                warn!(
                    branch = %branch_name,
                    "switching branches overwrites uncommitted changes to tracked files"
                );
                self.materializer()
                    .materialize(commit.tree_oid(), Path::new(""))?
            }
            None => MaterializeReport::default(),
        };

        self.refs().set_head(&branch_name)?;
        info!(
            branch = %branch_name,
            written = report.files_written,
            "switched branch"
        );

        Ok(report)
    }

    pub fn switch_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let report = self.switch_to_branch(name)?;

        writeln!(
            self.writer(),
            "Switched to branch '{}' ({} files updated)",
            name,
            report.files_written
        )?;

        Ok(())
    }
}
