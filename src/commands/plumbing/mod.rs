//! Plumbing commands
//!
//! - `hash-object`: compute a blob id and optionally store the blob
//! - `cat-file`: print a stored payload
//! - `ls-tree`: list a tree's entries
//! - `apply-patch`: replay a stored patch over a working file

pub mod apply_patch;
pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
