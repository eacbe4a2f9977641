pub mod breed;
pub mod config;

pub use breed::{BreedKey, SubBreedList};
pub use config::{ApiConfig, Config, LogFormat, LoggingConfig, RotationPolicy};
