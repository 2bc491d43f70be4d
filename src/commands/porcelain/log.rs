use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::object::Object;
use std::io::Write;

const COMMIT_SEPARATOR_WIDTH: usize = 48;

impl Repository {
    /// Lazy newest-first history of `name`.
    pub fn branch_history(&'_ self, name: &str) -> crate::errors::Result<History<'_>> {
        self.ensure_initialized()?;
        let branch_name = BranchName::try_parse(name.to_string())?;
        let start = self.refs().read_ref(&branch_name)?;

        Ok(self.history(start))
    }

    pub fn commit_history(&mut self, name: &str) -> anyhow::Result<()> {
        for entry in self.branch_history(name)? {
            let entry = entry?;

            writeln!(self.writer(), "{}", entry.oid.to_short_oid())?;
            writeln!(self.writer(), "{}", "=".repeat(COMMIT_SEPARATOR_WIDTH))?;
            writeln!(self.writer(), "{}", entry.commit.display())?;
        }

        Ok(())
    }
}
