//! In-memory caching layer for breed lookups.
//!
//! Uses `moka` as an unbounded concurrent map that is only ever filled by
//! successful lookups. Wraps provider ports as decorators.

pub mod caching_breed_provider;

pub use caching_breed_provider::CachingBreedProvider;
