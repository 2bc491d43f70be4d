use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::ROOT_SENTINEL;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;
use tracing::info;

impl Repository {
    /// Creates `name` pointing at the active branch's current commit.
    /// HEAD does not move.
    pub fn create_branch(&self, name: &str) -> Result<BranchName> {
        self.ensure_initialized()?;
        let branch_name = BranchName::try_parse(name.to_string())?;
        let _lock = self.lock()?;

        let source_oid = self.refs().read_head()?;
        self.refs()
            .create_branch(&branch_name, source_oid.as_ref())?;

        info!(branch = %branch_name, "created branch");
        Ok(branch_name)
    }

    /// Every branch with its target, sorted by name.
    pub fn branches(&self) -> Result<Vec<(BranchName, Option<ObjectId>)>> {
        self.ensure_initialized()?;

        self.refs()
            .list_branches()?
            .into_iter()
            .map(|branch_name| {
                let oid = self.refs().read_ref(&branch_name)?;
                Ok((branch_name, oid))
            })
            .collect()
    }

    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch_name = self.create_branch(name)?;
        let target = self.refs().read_ref(&branch_name)?;

        writeln!(
            self.writer(),
            "Created branch {} at {}",
            branch_name,
            short_target(target.as_ref())
        )?;

        Ok(())
    }

    pub fn list_branch(&mut self) -> anyhow::Result<()> {
        let branches = self.branches()?;
        let current_branch = self.refs().current_branch()?;

        writeln!(self.writer(), "  Branch\tCommit")?;
        writeln!(self.writer(), "===============")?;
        for (branch_name, target) in branches {
            let marker = if branch_name == current_branch { '*' } else { ' ' };
            writeln!(
                self.writer(),
                "{} {}\t{}",
                marker,
                branch_name,
                short_target(target.as_ref())
            )?;
        }

        Ok(())
    }
}

fn short_target(target: Option<&ObjectId>) -> String {
    target
        .map(ObjectId::to_short_oid)
        .unwrap_or_else(|| ROOT_SENTINEL.to_string())
}
