//! dog.ceo API breed provider.
//!
//! Makes direct HTTP calls to `GET {base_url}/api/breed/{breed}/list`. Every
//! failure mode is reported as `BreedNotFound`; the underlying cause is only
//! visible in the logs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ApiConfig, BreedKey, SubBreedList};
use crate::domain::ports::BreedProvider;

/// Body of a breed list response.
///
/// On success `message` is an array of sub-breed names; on failure the API
/// puts a human readable string there instead.
#[derive(Debug, Deserialize)]
struct BreedListResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Breed provider backed by the dog.ceo HTTP API.
#[derive(Debug, Clone)]
pub struct DogApiBreedProvider {
    client: Client,
    base_url: Url,
}

impl DogApiBreedProvider {
    /// Create a provider from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid breed API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Breed API base URL cannot carry a path: {base_url}");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Endpoint for a breed, with the key as a single encoded path segment.
    fn endpoint(&self, key: &BreedKey) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "breed", key.as_str(), "list"]);
        }
        url
    }

    async fn fetch(&self, key: &BreedKey) -> Result<SubBreedList> {
        let url = self.endpoint(key);
        debug!(%url, "requesting sub-breeds");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request to breed API")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Breed API returned HTTP {status}");
        }

        let body: BreedListResponse = response
            .json()
            .await
            .context("Failed to parse breed API response")?;

        parse_sub_breeds(body)
    }
}

/// Extract the sub-breed list from a decoded response body.
fn parse_sub_breeds(body: BreedListResponse) -> Result<SubBreedList> {
    if !body.status.eq_ignore_ascii_case("success") {
        let detail = body
            .message
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Unknown API error");
        anyhow::bail!("Breed API reported status {:?}: {detail}", body.status);
    }

    let Some(serde_json::Value::Array(items)) = body.message else {
        anyhow::bail!("Breed API response has no sub-breed array");
    };

    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(name) => Ok(name),
            other => anyhow::bail!("Unexpected sub-breed entry: {other}"),
        })
        .collect()
}

#[async_trait]
impl BreedProvider for DogApiBreedProvider {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<SubBreedList> {
        let key = BreedKey::parse(breed)?;

        self.fetch(&key).await.map_err(|err| {
            warn!(breed = %key, error = %format!("{err:#}"), "breed lookup failed");
            DomainError::breed_not_found(breed)
        })
    }
}
