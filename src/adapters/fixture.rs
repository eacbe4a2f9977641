//! In-memory breed provider.
//!
//! Answers from a fixed table, optionally loaded from a YAML fixture file of
//! the form:
//!
//! ```yaml
//! hound: [afghan, basset, blood]
//! pug: []
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BreedKey, SubBreedList};
use crate::domain::ports::BreedProvider;

/// Breed provider backed by a static table.
#[derive(Debug, Default)]
pub struct StaticBreedProvider {
    breeds: HashMap<BreedKey, SubBreedList>,
    calls: AtomicU64,
}

impl StaticBreedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a breed. A later entry for the same normalized name replaces the earlier one.
    pub fn with_breed<I, S>(mut self, breed: &str, sub_breeds: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = BreedKey::parse(breed)?;
        self.breeds
            .insert(key, sub_breeds.into_iter().map(Into::into).collect());
        Ok(self)
    }

    /// Parse a YAML mapping of breed name to sub-breed list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let table: BTreeMap<String, SubBreedList> =
            serde_yaml::from_str(yaml).context("Failed to parse breed fixture")?;

        table
            .into_iter()
            .try_fold(Self::new(), |provider, (breed, sub_breeds)| {
                provider.with_breed(&breed, sub_breeds)
            })
            .context("Breed fixture contains a blank breed name")
    }

    /// Load a YAML fixture file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read breed fixture {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("Failed to load breed fixture {}", path.display()))
    }

    /// Number of lookups served, including failed ones.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

#[async_trait]
impl BreedProvider for StaticBreedProvider {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<SubBreedList> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = BreedKey::parse(breed)?;
        self.breeds
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::breed_not_found(breed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_normalized() {
        let provider = StaticBreedProvider::new()
            .with_breed("Hound", ["afghan", "basset"])
            .unwrap();

        let subs = provider.get_sub_breeds("  HOUND ").await.unwrap();
        assert_eq!(subs, vec!["afghan", "basset"]);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_breed_keeps_raw_input() {
        let provider = StaticBreedProvider::new();

        let err = provider.get_sub_breeds(" Dingo").await.unwrap_err();
        assert_eq!(err, DomainError::BreedNotFound(" Dingo".to_string()));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_with_breed_rejects_blank_name() {
        let result = StaticBreedProvider::new().with_breed("  ", Vec::<String>::new());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_from_yaml_str() {
        let yaml = r"
hound: [afghan, basset, blood]
Pug: []
";
        let provider = StaticBreedProvider::from_yaml_str(yaml).unwrap();
        assert_eq!(provider.len(), 2);
        assert!(provider.get_sub_breeds("pug").await.unwrap().is_empty());
        assert_eq!(provider.get_sub_breeds("hound").await.unwrap().len(), 3);
    }

    #[test]
    fn test_from_yaml_str_rejects_bad_shapes() {
        assert!(StaticBreedProvider::from_yaml_str("hound: afghan").is_err());
        assert!(StaticBreedProvider::from_yaml_str("' ': [a]").is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breeds.yaml");
        std::fs::write(&path, "terrier: [irish, welsh]\n").unwrap();

        let provider = StaticBreedProvider::from_yaml_file(&path).unwrap();
        assert_eq!(provider.len(), 1);

        let missing = StaticBreedProvider::from_yaml_file(dir.path().join("nope.yaml"));
        assert!(missing.is_err());
    }
}
