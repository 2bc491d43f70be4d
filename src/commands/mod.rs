//! Command implementations
//!
//! Commands are `impl Repository` blocks, split the same way git splits them:
//!
//! - `plumbing`: direct access to objects (hash-object, cat-file, ls-tree, apply-patch)
//! - `porcelain`: user-facing workflows (init, commit, branches, history, diff)
//!
//! Each porcelain command comes as a pair: a typed operation returning
//! [`crate::errors::Result`] and a reporting wrapper that prints through the
//! repository writer.

pub mod plumbing;
pub mod porcelain;
