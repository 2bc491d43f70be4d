//! Commit history traversal
//!
//! - `history`: lazy walk from a commit back to the root of its chain

pub mod history;
