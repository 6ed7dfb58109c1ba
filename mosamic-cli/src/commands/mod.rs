//! CLI command implementations.

pub mod common;
pub mod generate;
pub mod serve;
