use crate::areas::repository::Repository;
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::objects::blob::split_lines;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Lines of the blob named like `file_path` in the active branch's last
    /// commit, found by pre-order search of its tree. Empty when the branch
    /// has no commit or no blob carries that name.
    pub fn committed_lines(&self, file_path: &Path) -> Result<Vec<String>> {
        let file_name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidEntryName(file_path.display().to_string()))?;

        let Some(head_oid) = self.refs().read_head()? else {
            return Ok(Vec::new());
        };
        let commit = self.database().parse_object_as_commit(&head_oid)?;

        match self.database().find_blob(commit.tree_oid(), file_name) {
            Ok(blob_oid) => Ok(self.database().parse_object_as_blob(&blob_oid)?.lines()),
            Err(Error::EntryNotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Diffs the committed version of `file_path` against the working file and
    /// stores the result as a patch. A missing working file diffs as empty.
    pub fn diff_file(&self, file_path: &Path) -> Result<ObjectId> {
        self.ensure_initialized()?;

        let base = self.committed_lines(file_path)?;
        let current = if self.workspace().path().join(file_path).is_file() {
            split_lines(&String::from_utf8_lossy(
                &self.workspace().read_file(file_path)?,
            ))
        } else {
            Vec::new()
        };

        self.diff_engine().compute_diff(&base, &current)
    }

    pub fn diff(&mut self, file_path: &str) -> anyhow::Result<()> {
        let file_path = Path::new(file_path);
        let patch_oid = self.diff_file(file_path)?;
        let patch = self.database().parse_object_as_patch(&patch_oid)?;

        writeln!(
            self.writer(),
            "{}",
            format!("diff {}", file_path.display()).bold()
        )?;
        writeln!(self.writer(), "{}", format!("patch {patch_oid}").bold())?;

        for edit in patch.edits() {
            match edit {
                Edit::Delete { .. } => writeln!(self.writer(), "{}", edit.to_string().red())?,
                Edit::Insert { .. } => writeln!(self.writer(), "{}", edit.to_string().green())?,
                Edit::Equal { .. } => writeln!(self.writer(), "{edit}")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    fn repository(dir: &TempDir) -> Repository {
        let repository = Repository::new(dir.path(), Box::new(std::io::sink())).unwrap();
        repository.initialize("Ada").unwrap();
        repository
    }

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn patch_replays_committed_into_working_content() {
        let dir = TempDir::new().unwrap();
        dir.child("src/main.rs").write_str("a\nb\nc\n").unwrap();
        let repository = repository(&dir);
        dir.child("src/main.rs").write_str("a\nc\nd\n").unwrap();

        let patch_oid = repository.diff_file(Path::new("src/main.rs")).unwrap();

        let base = repository.committed_lines(Path::new("src/main.rs")).unwrap();
        assert_eq!(base, lines(&["a", "b", "c"]));
        assert_eq!(
            repository.diff_engine().apply_patch(&base, &patch_oid).unwrap(),
            lines(&["a", "c", "d"])
        );
    }

    #[test]
    fn file_unknown_to_head_diffs_against_nothing() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);
        dir.child("fresh.txt").write_str("x\ny\n").unwrap();

        let patch_oid = repository.diff_file(Path::new("fresh.txt")).unwrap();

        assert_eq!(
            std::fs::read_to_string(repository.database().object_path(&patch_oid)).unwrap(),
            "+x\n+y\n"
        );
    }

    #[test]
    fn unchanged_file_gives_an_identity_patch() {
        let dir = TempDir::new().unwrap();
        dir.child("same.txt").write_str("keep\n\nme\n").unwrap();
        let repository = repository(&dir);

        let patch_oid = repository.diff_file(Path::new("same.txt")).unwrap();

        let patch = repository.database().parse_object_as_patch(&patch_oid).unwrap();
        assert!(patch.is_identity());
        assert_eq!(patch.edits().len(), 3);
    }
}
