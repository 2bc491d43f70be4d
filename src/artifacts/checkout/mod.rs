//! Checkout support
//!
//! - `materializer`: reconstructs a directory from a stored tree

pub mod materializer;
