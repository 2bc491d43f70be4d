//! tig: a minimal content-addressed version control engine
//!
//! - `areas`: on-disk state (object store, refs, config, working directory)
//! - `artifacts`: object formats and the algorithms over them
//! - `commands`: plumbing and porcelain operations on a [`areas::repository::Repository`]
//! - `errors`: the error taxonomy shared by all of the above

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
