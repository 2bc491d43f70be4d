use crate::areas::repository::CONTROL_DIR;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, IoResultExt, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Directory names never captured in a snapshot, at any depth
const IGNORED_PATHS: [&str; 2] = [".git", CONTROL_DIR];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    /// symlinks, sockets, devices and fifos
    Other,
}

impl From<std::fs::FileType> for FileKind {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        }
    }
}

/// One child of a workspace directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEntry {
    pub name: String,
    /// path relative to the workspace root
    pub path: PathBuf,
    pub kind: FileKind,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the direct children of `dir_path` (relative to the workspace root).
    ///
    /// Symlinks are reported as [`FileKind::Other`] rather than followed.
    pub fn list_dir(&self, dir_path: &Path) -> Result<Vec<WorkspaceEntry>> {
        let absolute_dir = self.path.join(dir_path);

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&absolute_dir).with_path(&absolute_dir)? {
            let entry = entry.with_path(&absolute_dir)?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| Error::InvalidEntryName(name.to_string_lossy().to_string()))?;

            if Self::is_ignored(&name) {
                continue;
            }

            let file_type = entry.file_type().with_path(entry.path())?;
            entries.push(WorkspaceEntry {
                path: dir_path.join(&name),
                name,
                kind: file_type.into(),
            });
        }

        Ok(entries)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .with_path(file_path)
    }

    /// Blob hash of the file currently at `file_path`, or `None` if nothing is there.
    pub fn file_oid(&self, file_path: &Path) -> Result<Option<ObjectId>> {
        if !self.path.join(file_path).exists() {
            return Ok(None);
        }

        let content = self.read_file(file_path)?;
        Ok(Some(ObjectId::from_content(&ObjectType::Blob, &content)))
    }

    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> Result<()> {
        let file_path = self.path.join(file_path);

        std::fs::write(&file_path, content).with_path(file_path)
    }

    /// Create `dir_path` if missing. Returns whether a directory was created.
    pub fn make_directory(&self, dir_path: &Path) -> Result<bool> {
        let dir_path = self.path.join(dir_path);

        if dir_path.is_dir() {
            return Ok(false);
        }

        std::fs::create_dir_all(&dir_path).with_path(dir_path)?;
        Ok(true)
    }
}
