#![allow(dead_code)]

pub mod command;
pub mod file;

/// A 40-character lowercase hex string
pub const OBJECT_ID_REGEX: &str = r"^[0-9a-f]{40}$";
