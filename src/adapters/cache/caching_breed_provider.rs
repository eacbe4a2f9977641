//! Memoizing wrapper for any `BreedProvider`.
//!
//! Successful lookups are cached for the lifetime of the instance under the
//! normalized breed key. Failures are never cached, so a later call for the
//! same breed goes back to the wrapped provider.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BreedKey, SubBreedList};
use crate::domain::ports::BreedProvider;

/// Caching breed provider decorator.
///
/// The cache has no capacity bound and no TTL: entries are never evicted or
/// replaced once stored. `calls_made` counts attempts that reached the wrapped
/// provider, whether or not they succeeded.
///
/// Concurrent misses on the same key are coalesced into a single upstream call.
pub struct CachingBreedProvider<P: BreedProvider + ?Sized> {
    inner: Arc<P>,
    /// Normalized breed -> sub-breeds. Successful results only.
    cache: Cache<BreedKey, SubBreedList>,
    calls_made: AtomicU64,
}

impl<P: BreedProvider + ?Sized> CachingBreedProvider<P> {
    /// Wrap `inner` with an empty cache and a zero call counter.
    pub fn new(inner: Arc<P>) -> Self {
        Self {
            inner,
            cache: Cache::builder().build(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of lookups that reached the wrapped provider.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Whether a successful result for `breed` is currently cached.
    pub fn contains(&self, breed: &str) -> bool {
        BreedKey::parse(breed).is_ok_and(|key| self.cache.contains_key(&key))
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &Arc<P> {
        &self.inner
    }
}

#[async_trait]
impl<P: BreedProvider + ?Sized> BreedProvider for CachingBreedProvider<P> {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<SubBreedList> {
        // Blank input never reaches the cache or the counter
        let key = BreedKey::parse(breed)?;

        if let Some(cached) = self.cache.get(&key).await {
            debug!(breed = %key, "breed cache hit");
            return Ok(cached);
        }

        // Cache miss - the counter moves before the upstream call is made.
        // The wrapped provider sees the spelling of whichever caller runs the
        // init; waiters coalesced onto it get an error naming their own input.
        self.cache
            .try_get_with(key.clone(), async {
                let attempt = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(breed = %key, attempt, "breed cache miss");
                self.inner
                    .get_sub_breeds(breed)
                    .await
                    .inspect_err(|err| debug!(breed = %key, error = %err, "lookup failed, not cached"))
            })
            .await
            .map_err(|_| DomainError::breed_not_found(breed))
    }
}
