//! Infrastructure layer module
//!
//! Ambient services the binary wires together:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
