//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (kind, object ID and name per entry)
//! - **Commit**: Snapshot metadata chaining to a parent commit
//! - **Patch**: Line diff between two versions of a file
//!
//! The hash covers `<type> <size> <payload>`; only the payload is written to disk.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod patch;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated hash used in listings
pub const SHORT_OBJECT_ID_LENGTH: usize = 6;
