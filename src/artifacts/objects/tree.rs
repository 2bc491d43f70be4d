//! Tree object
//!
//! Trees represent one directory. Each entry names a blob (file) or another
//! tree (subdirectory) by hash.
//!
//! ## Format
//!
//! One line per entry: `<blob|tree> <40-hex-hash> <name>\n`
//!
//! Entries are kept sorted by name so that two directories with the same
//! content always produce the same tree hash, whatever order the filesystem
//! listed them in.

use crate::artifacts::objects::object::{
    Object, ObjectParseError, Packable, Unpackable, payload_lines,
};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::BufRead;

/// A single tree line: the kind of object and its hash
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub object_type: ObjectType,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.object_type == ObjectType::Tree
    }

    pub fn is_blob(&self) -> bool {
        self.object_type == ObjectType::Blob
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Add an entry, rejecting names the line format cannot carry.
    pub fn insert(&mut self, name: String, entry: TreeEntry) -> Result<()> {
        if !Self::is_valid_name(&name) {
            return Err(Error::InvalidEntryName(name));
        }
        if !entry.is_blob() && !entry.is_tree() {
            return Err(Error::InvalidObjectType(entry.object_type.to_string()));
        }

        self.entries.insert(name, entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &TreeEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['\n', '\r', '/', '\0'])
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        self.entries
            .iter()
            .map(|(name, entry)| format!("{} {} {}\n", entry.object_type, entry.oid, name))
            .collect::<String>()
            .into()
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> std::result::Result<Self, ObjectParseError> {
        let mut tree = Tree::default();

        for line in payload_lines(reader) {
            let line = line?;
            let mut parts = line.splitn(3, ' ');

            let (Some(kind), Some(oid), Some(name)) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(ObjectParseError(format!("malformed tree line: {line:?}")));
            };

            let object_type =
                ObjectType::try_from(kind).map_err(|e| ObjectParseError(e.to_string()))?;
            let oid = ObjectId::try_parse(oid.to_string())
                .map_err(|e| ObjectParseError(e.to_string()))?;

            tree.insert(name.to_string(), TreeEntry::new(object_type, oid))
                .map_err(|e| ObjectParseError(e.to_string()))?;
        }

        Ok(tree)
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|(name, entry)| format!("{} {}\t{}", entry.object_type, entry.oid, name))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
