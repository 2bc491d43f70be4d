//! Line diffing
//!
//! - `edit`: tagged lines of an edit script
//! - `lcs`: dynamic-programming longest-common-subsequence diff
//! - `diff_engine`: stores diffs as patch objects and replays them

pub mod diff_engine;
pub mod edit;
pub mod lcs;
