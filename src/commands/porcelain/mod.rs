//! Porcelain commands
//!
//! - `init`: create the control directory and the initial commit
//! - `commit`: snapshot the working directory onto the active branch
//! - `branch`: create and list branches
//! - `switch_branch`: materialize another branch and move HEAD
//! - `log`: walk a branch's commit history
//! - `diff`: diff a working file against its last committed version

pub mod branch;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod switch_branch;
