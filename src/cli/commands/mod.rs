//! CLI command implementations.

pub mod config;
pub mod sub_breeds;
