//! Domain errors for breed lookups.

use thiserror::Error;

/// Domain-level errors that can occur while looking up breeds.
///
/// Every negative outcome collapses into [`DomainError::BreedNotFound`], whatever
/// the root cause (blank input, unknown breed, transport failure, bad payload).
/// The carried string is the breed exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Breed not found: {0:?}")]
    BreedNotFound(String),
}

impl DomainError {
    /// Build a `BreedNotFound` for the given raw input.
    pub fn breed_not_found(breed: impl Into<String>) -> Self {
        Self::BreedNotFound(breed.into())
    }

    /// The breed identifier that failed, as originally supplied.
    pub fn breed(&self) -> &str {
        match self {
            Self::BreedNotFound(breed) => breed,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
