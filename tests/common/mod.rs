//! Common test utilities for integration tests
//!
//! Provides shared fixtures and providers used across multiple integration
//! test files.

#![allow(dead_code)]

use async_trait::async_trait;
use breedcache::{BreedProvider, DomainError, DomainResult, SubBreedList};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// JSON body the breed API returns for a known breed
pub fn success_body(sub_breeds: &[&str]) -> String {
    serde_json::json!({
        "message": sub_breeds,
        "status": "success"
    })
    .to_string()
}

/// JSON body the breed API returns for an unknown breed
pub fn not_found_body() -> String {
    serde_json::json!({
        "status": "error",
        "message": "Breed not found (main breed does not exist)",
        "code": 404
    })
    .to_string()
}

/// Provider that takes a while to answer, so concurrent callers overlap
pub struct SlowProvider {
    delay: Duration,
    answer: Option<Vec<&'static str>>,
    calls: AtomicU64,
}

impl SlowProvider {
    pub fn succeeding(delay: Duration, sub_breeds: Vec<&'static str>) -> Self {
        Self {
            delay,
            answer: Some(sub_breeds),
            calls: AtomicU64::new(0),
        }
    }

    pub fn failing(delay: Duration) -> Self {
        Self {
            delay,
            answer: None,
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BreedProvider for SlowProvider {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<SubBreedList> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.answer
            .as_ref()
            .map(|subs| subs.iter().map(ToString::to_string).collect())
            .ok_or_else(|| DomainError::breed_not_found(breed))
    }
}
