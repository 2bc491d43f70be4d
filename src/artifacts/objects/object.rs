use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::io::BufRead;

/// Payload could not be decoded as the expected object kind.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ObjectParseError(pub String);

impl From<std::io::Error> for ObjectParseError {
    fn from(err: std::io::Error) -> Self {
        ObjectParseError(err.to_string())
    }
}

/// Payload lines split on `\n` only. A `\r` before the newline stays part of
/// the line, unlike `BufRead::lines`.
pub fn payload_lines(reader: impl BufRead) -> impl Iterator<Item = std::io::Result<String>> {
    reader.split(b'\n').map(|line| {
        String::from_utf8(line?)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

pub trait Packable {
    /// The payload as stored on disk (no type header).
    fn serialize(&self) -> Bytes;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self, ObjectParseError>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> ObjectId {
        ObjectId::from_content(&self.object_type(), &self.serialize())
    }
}
