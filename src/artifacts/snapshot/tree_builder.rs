use crate::areas::database::Database;
use crate::areas::workspace::{FileKind, Workspace};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use crate::errors::{Error, Result};
use derive_new::new;
use std::path::Path;
use tracing::debug;

/// Snapshots a workspace directory into nested tree objects.
#[derive(Debug, new)]
pub struct TreeBuilder<'r> {
    database: &'r Database,
    workspace: &'r Workspace,
}

impl TreeBuilder<'_> {
    /// Store every file under `dir_path` as a blob and every directory as a
    /// tree, bottom-up, returning the hash of the tree for `dir_path` itself.
    ///
    /// Anything that is neither a regular file nor a directory aborts the
    /// snapshot instead of being left out silently.
    pub fn snapshot(&self, dir_path: &Path) -> Result<ObjectId> {
        let mut tree = Tree::default();

        for entry in self.workspace.list_dir(dir_path)? {
            let tree_entry = match entry.kind {
                FileKind::Directory => {
                    TreeEntry::new(ObjectType::Tree, self.snapshot(&entry.path)?)
                }
                FileKind::File => {
                    let content = self.workspace.read_file(&entry.path)?;
                    TreeEntry::new(
                        ObjectType::Blob,
                        self.database.put(ObjectType::Blob, &content)?,
                    )
                }
                FileKind::Other => {
                    return Err(Error::UnsupportedFileType(
                        self.workspace.path().join(&entry.path),
                    ));
                }
            };

            tree.insert(entry.name, tree_entry)?;
        }

        let tree_oid = self.database.store(&tree)?;
        debug!(tree = %tree_oid, dir = %dir_path.display(), entries = tree.len(), "snapshot");

        Ok(tree_oid)
    }
}
