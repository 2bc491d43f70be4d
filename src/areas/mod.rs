//! Stateful on-disk areas of a repository
//!
//! - `database`: content-addressed object store
//! - `workspace`: file I/O against the working directory
//! - `refs`: branches and HEAD
//! - `config`: committer name and working directory
//! - `lock`: repository-wide writer lock
//! - `repository`: ties the areas to one root directory

pub mod config;
pub mod database;
pub mod lock;
pub mod refs;
pub mod repository;
pub mod workspace;
