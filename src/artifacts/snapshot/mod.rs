//! Directory snapshots
//!
//! - `tree_builder`: recursive directory-to-tree snapshotting

pub mod tree_builder;
