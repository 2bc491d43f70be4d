//! Writing a stored tree back into a directory
//!
//! Only files whose current content hashes differ from the tree entry are
//! rewritten. Files present on disk but absent from the tree are left alone:
//! materializing never deletes.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;
use tracing::debug;

/// What a materialization touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub files_written: usize,
    pub files_unchanged: usize,
    pub directories_created: usize,
}

#[derive(Debug, new)]
pub struct Materializer<'r> {
    database: &'r Database,
    workspace: &'r Workspace,
}

impl Materializer<'_> {
    pub fn materialize(&self, tree_oid: &ObjectId, target: &Path) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();
        self.materialize_tree(tree_oid, target, &mut report)?;

        debug!(
            tree = %tree_oid,
            written = report.files_written,
            unchanged = report.files_unchanged,
            "materialized tree"
        );
        Ok(report)
    }

    fn materialize_tree(
        &self,
        tree_oid: &ObjectId,
        target: &Path,
        report: &mut MaterializeReport,
    ) -> Result<()> {
        if self.workspace.make_directory(target)? {
            report.directories_created += 1;
        }

        let tree = self.database.parse_object_as_tree(tree_oid)?;

        for (name, entry) in tree.entries() {
            let path = target.join(name);

            if entry.is_tree() {
                self.materialize_tree(&entry.oid, &path, report)?;
                continue;
            }

            if self.workspace.file_oid(&path)?.as_ref() == Some(&entry.oid) {
                report.files_unchanged += 1;
                continue;
            }

            let content = self.database.load(&entry.oid)?;
            self.workspace.write_file(&path, &content)?;
            report.files_written += 1;
        }

        Ok(())
    }
}
