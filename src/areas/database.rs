//! Content-addressed object store
//!
//! Every object lives at `objects/<2-hex>/<38-hex>` and holds only its
//! payload. Writes go through a temporary file in the bucket directory and a
//! rename, and an object that already exists is never rewritten.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::patch::Patch;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Error, IoResultExt, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Hash `content` as an object of `object_type` and write it unless an
    /// object with that hash is already stored.
    pub fn put(&self, object_type: ObjectType, content: &[u8]) -> Result<ObjectId> {
        let object_id = ObjectId::from_content(&object_type, content);
        let object_path = self.object_path(&object_id);

        if object_path.exists() {
            debug!(oid = %object_id, %object_type, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| Error::InvalidObjectId(object_id.to_string()))?;
        std::fs::create_dir_all(object_dir).with_path(object_dir)?;

        self.write_object(object_dir, &object_path, content)?;
        debug!(oid = %object_id, %object_type, size = content.len(), "stored object");

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        self.put(object.object_type(), &object.serialize())
    }

    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(object_id.clone()))
            }
            Err(source) => Err(Error::Io {
                path: object_path,
                source,
            }),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        self.parse_object(object_id)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        self.parse_object(object_id)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        self.parse_object(object_id)
    }

    pub fn parse_object_as_patch(&self, object_id: &ObjectId) -> Result<Patch> {
        self.parse_object(object_id)
    }

    fn parse_object<T: Unpackable>(&self, object_id: &ObjectId) -> Result<T> {
        let content = self.load(object_id)?;

        T::deserialize(Cursor::new(content)).map_err(|e| Error::CorruptObject {
            oid: object_id.clone(),
            reason: e.to_string(),
        })
    }

    /// Pre-order search of a tree for the first blob called `name`.
    ///
    /// Entries are visited in name order and a subtree is searched as soon as
    /// it is reached, so a shallower match only wins if it sorts first.
    pub fn find_blob(&self, tree_oid: &ObjectId, name: &str) -> Result<ObjectId> {
        self.search_blob(tree_oid, name)?
            .ok_or_else(|| Error::EntryNotFound(name.to_string()))
    }

    fn search_blob(&self, tree_oid: &ObjectId, name: &str) -> Result<Option<ObjectId>> {
        let tree = self.parse_object_as_tree(tree_oid)?;

        for (entry_name, entry) in tree.entries() {
            if entry.is_blob() && entry_name == name {
                return Ok(Some(entry.oid.clone()));
            }
            if entry.is_tree()
                && let Some(oid) = self.search_blob(&entry.oid, name)?
            {
                return Ok(Some(oid));
            }
        }

        Ok(None)
    }

    fn write_object(&self, object_dir: &Path, object_path: &Path, content: &[u8]) -> Result<()> {
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .with_path(&temp_object_path)?;

        file.write_all(content).with_path(&temp_object_path)?;
        file.sync_all().with_path(&temp_object_path)?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).with_path(object_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
