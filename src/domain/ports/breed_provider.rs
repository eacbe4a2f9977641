//! Breed provider port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::SubBreedList;

/// Source of sub-breed lists.
///
/// Implementations must be deterministic per breed for as long as they are in
/// use, and must reject blank names with `BreedNotFound`. Every failure is
/// reported as `BreedNotFound` carrying the breed exactly as supplied.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Fetch the sub-breeds of `breed`.
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<SubBreedList>;
}

