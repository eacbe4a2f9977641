//! Breedcache - memoized dog breed lookups
//!
//! Fetches the sub-breeds of a named dog breed from the dog.ceo API and caches
//! successful results so repeated lookups do not hit the network.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): breed models, the domain error and the provider port
//! - **Adapters** (`adapters`): HTTP, in-memory and caching providers
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use breedcache::{ApiConfig, BreedProvider, CachingBreedProvider, DogApiBreedProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let remote = DogApiBreedProvider::new(&ApiConfig::default())?;
//!     let provider = CachingBreedProvider::new(Arc::new(remote));
//!
//!     let hounds = provider.get_sub_breeds("Hound").await?;
//!     let again = provider.get_sub_breeds(" hound ").await?;
//!     assert_eq!(hounds, again);
//!     assert_eq!(provider.calls_made(), 1);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::{CachingBreedProvider, DogApiBreedProvider, StaticBreedProvider};
pub use domain::models::{ApiConfig, BreedKey, Config, LoggingConfig, SubBreedList};
pub use domain::ports::BreedProvider;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerImpl;
