//! Port trait definitions (Hexagonal Architecture)
//!
//! Adapters implement these traits so the caching layer stays independent of
//! where breed data comes from:
//! - BreedProvider: sub-breed lookup by breed name

pub mod breed_provider;

pub use breed_provider::BreedProvider;
