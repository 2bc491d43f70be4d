use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::checkout::materializer::Materializer;
use crate::artifacts::diff::diff_engine::DiffEngine;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::snapshot::tree_builder::TreeBuilder;
use crate::errors::{Error, IoResultExt, Result};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the control directory inside the working directory
pub const CONTROL_DIR: &str = "tig";

const CONFIG_FILE: &str = ".config";
const LOCK_FILE: &str = "lock";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Opens (without initializing) the repository rooted at `path`.
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            std::fs::create_dir_all(path).with_path(path)?;
        }
        let path = path.canonicalize().with_path(path)?;
        let control_path = path.join(CONTROL_DIR);

        let database = Database::new(control_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(control_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.control_path().join(CONFIG_FILE)
    }

    pub fn is_initialized(&self) -> bool {
        self.refs.head_path().is_file()
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotInitialized(self.path.to_path_buf()))
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> Result<Config> {
        Config::load(&self.config_path())
    }

    /// Blocks until no other process mutates this repository.
    pub fn lock(&self) -> Result<RepositoryLock> {
        RepositoryLock::acquire(&self.control_path().join(LOCK_FILE))
    }

    pub fn tree_builder(&'_ self) -> TreeBuilder<'_> {
        TreeBuilder::new(&self.database, &self.workspace)
    }

    pub fn materializer(&'_ self) -> Materializer<'_> {
        Materializer::new(&self.database, &self.workspace)
    }

    pub fn diff_engine(&'_ self) -> DiffEngine<'_> {
        DiffEngine::new(&self.database)
    }

    pub fn history(&'_ self, start: Option<ObjectId>) -> History<'_> {
        History::new(&self.database, start)
    }
}
