//! Patch object
//!
//! A stored line diff. Each line carries a one-character tag followed by the
//! line content: `' '` unchanged, `'-'` removed, `'+'` added.
//!
//! A patch only makes sense against the base file it was computed from;
//! nothing in the payload records which version that was.

use crate::artifacts::diff::edit::Edit;
use crate::artifacts::objects::object::{
    Object, ObjectParseError, Packable, Unpackable, payload_lines,
};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Patch {
    edits: Vec<Edit<String>>,
}

impl Patch {
    pub fn edits(&self) -> &[Edit<String>] {
        &self.edits
    }

    pub fn is_identity(&self) -> bool {
        self.edits.iter().all(Edit::is_equal)
    }

    /// Replay the patch against `base`.
    ///
    /// Unchanged and removed lines each consume one base line; added lines are
    /// emitted without consuming. Base lines the patch never reached are
    /// appended unchanged.
    pub fn apply(&self, base: &[String]) -> Vec<String> {
        let mut output = Vec::with_capacity(base.len());
        let mut cursor = 0;

        for edit in &self.edits {
            match edit {
                Edit::Equal { value } => {
                    output.push(base.get(cursor).unwrap_or(value).clone());
                    cursor += 1;
                }
                Edit::Delete { .. } => cursor += 1,
                Edit::Insert { value } => output.push(value.clone()),
            }
        }

        if cursor < base.len() {
            output.extend_from_slice(&base[cursor..]);
        }

        output
    }
}

impl Packable for Patch {
    fn serialize(&self) -> Bytes {
        self.edits
            .iter()
            .map(|edit| format!("{edit}\n"))
            .collect::<String>()
            .into()
    }
}

impl Unpackable for Patch {
    fn deserialize(reader: impl BufRead) -> Result<Self, ObjectParseError> {
        let edits = payload_lines(reader)
            .map(|line| {
                let line = line?;
                // tags are ASCII, so byte 1 is a char boundary whenever the tag is valid
                let value = line.get(1..).unwrap_or_default().to_string();

                match line.chars().next() {
                    Some(' ') => Ok(Edit::Equal { value }),
                    Some('-') => Ok(Edit::Delete { value }),
                    Some('+') => Ok(Edit::Insert { value }),
                    _ => Err(ObjectParseError(format!("malformed patch line: {line:?}"))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Patch::new(edits))
    }
}

impl Object for Patch {
    fn object_type(&self) -> ObjectType {
        ObjectType::Patch
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

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn appends_base_lines_the_patch_never_reached() {
        let patch = Patch::new(vec![
            Edit::Equal { value: "a".into() },
            Edit::Delete { value: "b".into() },
            Edit::Insert { value: "B".into() },
        ]);

        let output = patch.apply(&lines(&["a", "b", "c", "d"]));

        assert_eq!(output, lines(&["a", "B", "c", "d"]));
    }

    #[test]
    fn parses_tagged_lines_including_empty_content() {
        let patch = Patch::deserialize(Cursor::new(" keep\n-\n+new\n")).unwrap();

        assert_eq!(
            patch.edits(),
            &[
                Edit::Equal { value: "keep".into() },
                Edit::Delete { value: "".into() },
                Edit::Insert { value: "new".into() },
            ]
        );
    }

    #[test]
    fn keeps_carriage_returns_in_line_content() {
        let patch = Patch::deserialize(Cursor::new(" x\r\n+y\r\n-\r\n")).unwrap();

        assert_eq!(
            patch.edits(),
            &[
                Edit::Equal { value: "x\r".into() },
                Edit::Insert { value: "y\r".into() },
                Edit::Delete { value: "\r".into() },
            ]
        );
    }

    #[test]
    fn rejects_untagged_lines() {
        assert!(Patch::deserialize(Cursor::new(" ok\n\n")).is_err());
        assert!(Patch::deserialize(Cursor::new("?odd\n")).is_err());
    }
}
