//! CLI command implementations.

pub mod explain;
