//! Commit object
//!
//! Commits tie a tree snapshot to its parent commit, forming a singly-linked
//! chain that ends at the `root` sentinel.
//!
//! ## Format
//!
//! ```text
//! parent <hash-or-root>
//! tree <tree-hash>
//! committer <name>
//! timestamp <YYYY-mm-dd HH:MM:SS>
//! message <message>
//! ```

use crate::artifacts::objects::object::{
    Object, ObjectParseError, Packable, Unpackable, payload_lines,
};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Parent value of the first commit on a chain
pub const ROOT_SENTINEL: &str = "root";

/// Format of the `timestamp` line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable that pins the commit timestamp
pub const COMMITTER_DATE_ENV: &str = "TIG_COMMITTER_DATE";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    parent: Option<ObjectId>,
    tree_oid: ObjectId,
    committer: String,
    timestamp: String,
    message: String,
}

impl Commit {
    /// Current local time, unless `TIG_COMMITTER_DATE` holds a valid timestamp.
    pub fn generate_timestamp() -> String {
        std::env::var(COMMITTER_DATE_ENV)
            .ok()
            .filter(|date| chrono::NaiveDateTime::parse_from_str(date, TIMESTAMP_FORMAT).is_ok())
            .unwrap_or_else(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn committer(&self) -> &str {
        &self.committer
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let parent = self
            .parent
            .as_ref()
            .map(|oid| oid.as_ref())
            .unwrap_or(ROOT_SENTINEL);

        format!(
            "parent {}\ntree {}\ncommitter {}\ntimestamp {}\nmessage {}\n",
            parent, self.tree_oid, self.committer, self.timestamp, self.message
        )
        .into()
    }
}

fn read_field(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    key: &str,
) -> Result<String, ObjectParseError> {
    let line = lines
        .next()
        .ok_or_else(|| ObjectParseError(format!("missing {key} line")))??;

    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::to_string)
        .ok_or_else(|| ObjectParseError(format!("expected {key} line, got {line:?}")))
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> Result<Self, ObjectParseError> {
        let mut lines = payload_lines(reader);

        let parent = match read_field(&mut lines, "parent")?.as_str() {
            ROOT_SENTINEL => None,
            oid => Some(
                ObjectId::try_parse(oid.to_string())
                    .map_err(|e| ObjectParseError(e.to_string()))?,
            ),
        };
        let tree_oid = ObjectId::try_parse(read_field(&mut lines, "tree")?)
            .map_err(|e| ObjectParseError(e.to_string()))?;
        let committer = read_field(&mut lines, "committer")?;
        let timestamp = read_field(&mut lines, "timestamp")?;

        // the message is the only field allowed to span several lines
        let mut message = read_field(&mut lines, "message")?;
        for line in lines {
            message.push('\n');
            message.push_str(&line?);
        }

        Ok(Commit::new(parent, tree_oid, committer, timestamp, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.serialize()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn tree_oid() -> ObjectId {
        ObjectId::try_parse("c".repeat(40)).unwrap()
    }

    #[test]
    fn root_commit_serializes_sentinel_parent() {
        let commit = Commit::new(
            None,
            tree_oid(),
            "jane".into(),
            "2024-01-02 03:04:05".into(),
            "init".into(),
        );

        let expected = format!(
            "parent root\ntree {}\ncommitter jane\ntimestamp 2024-01-02 03:04:05\nmessage init\n",
            tree_oid()
        );
        assert_eq!(commit.serialize(), Bytes::from(expected));
    }

    #[test]
    fn parses_multiline_messages_back() {
        let parent = ObjectId::try_parse("d".repeat(40)).unwrap();
        let commit = Commit::new(
            Some(parent),
            tree_oid(),
            "jane doe".into(),
            "2024-01-02 03:04:05".into(),
            "subject\n\nbody".into(),
        );

        let parsed = Commit::deserialize(Cursor::new(commit.serialize())).unwrap();

        assert_eq!(parsed, commit);
        assert_eq!(parsed.short_message(), "subject");
    }

    #[test]
    fn crlf_messages_survive_a_round_trip() {
        let commit = Commit::new(
            None,
            tree_oid(),
            "jane doe".into(),
            "2024-01-02 03:04:05".into(),
            "subject\r\nbody".into(),
        );

        let parsed = Commit::deserialize(Cursor::new(commit.serialize())).unwrap();

        assert_eq!(parsed.message(), "subject\r\nbody");
        assert_eq!(parsed.object_id(), commit.object_id());
    }

    #[test]
    fn rejects_fields_out_of_order() {
        let payload = format!("tree {}\nparent root\n", tree_oid());

        assert!(Commit::deserialize(Cursor::new(payload)).is_err());
    }
}
