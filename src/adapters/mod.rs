//! Adapters implementing the breed provider port.

pub mod cache;
pub mod dog_api;
pub mod fixture;

pub use cache::CachingBreedProvider;
pub use dog_api::DogApiBreedProvider;
pub use fixture::StaticBreedProvider;
