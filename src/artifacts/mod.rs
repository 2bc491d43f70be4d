//! Data structures and algorithms
//!
//! - `branch`: branch name validation
//! - `checkout`: writing stored trees back to disk
//! - `core`: shared filesystem helpers
//! - `diff`: LCS line diff and patch objects
//! - `log`: commit history traversal
//! - `objects`: object types (blob, tree, commit, patch) and ids
//! - `snapshot`: building trees from directories

pub mod branch;
pub mod checkout;
pub mod core;
pub mod diff;
pub mod log;
pub mod objects;
pub mod snapshot;
