//! Domain layer for breed lookups
//!
//! This module contains the breed models, the single domain error kind and
//! the provider port that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
