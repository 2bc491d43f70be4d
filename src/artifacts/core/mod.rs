//! Shared filesystem helpers

use crate::errors::{Error, IoResultExt, Result};
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `content` via a temporary sibling file and a rename,
/// so readers see either the old or the new content and never a torn write.
///
/// Temporary names start with `.` so they never parse as branch names.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
        });
    };
    std::fs::create_dir_all(dir).with_path(dir)?;

    let temp_path = dir.join(format!(
        ".{}.tmp-{}",
        file_name.to_string_lossy(),
        rand::random::<u32>()
    ));
    {
        let mut file = std::fs::File::create(&temp_path).with_path(&temp_path)?;
        file.write_all(content).with_path(&temp_path)?;
        file.sync_all().with_path(&temp_path)?;
    }

    std::fs::rename(&temp_path, path).with_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_content_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("refs").join("master");

        write_atomically(&path, b"first\n").unwrap();
        write_atomically(&path, b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
        assert_eq!(std::fs::read_dir(dir.path().join("refs")).unwrap().count(), 1);
    }
}
