//! Breed identity and sub-breed lists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// Ordered list of sub-breed names as returned by a provider.
pub type SubBreedList = Vec<String>;

/// Normalized breed name used as lookup identity.
///
/// Surrounding whitespace is trimmed and the name is lower-cased with Unicode
/// default case mapping, which does not depend on the host locale. Two inputs
/// that normalize to the same key name the same breed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BreedKey(String);

impl BreedKey {
    /// Normalize a raw breed name.
    ///
    /// Fails with `BreedNotFound` carrying `raw` unchanged when nothing is left
    /// after trimming.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::breed_not_found(raw));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BreedKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BreedKey> for String {
    fn from(key: BreedKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let key = BreedKey::parse("  BullDog \t").unwrap();
        assert_eq!(key.as_str(), "bulldog");
    }

    #[test]
    fn test_equivalent_spellings_share_key() {
        let a = BreedKey::parse("Husky").unwrap();
        let b = BreedKey::parse(" husky ").unwrap();
        let c = BreedKey::parse("HUSKY").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let key = BreedKey::parse(" German  Shepherd ").unwrap();
        assert_eq!(key.as_str(), "german  shepherd");
    }

    #[test]
    fn test_blank_input_is_rejected_with_raw_value() {
        for raw in ["", "   ", "\n\t"] {
            let err = BreedKey::parse(raw).unwrap_err();
            assert_eq!(err, DomainError::BreedNotFound(raw.to_string()));
        }
    }

    #[test]
    fn test_case_folding_is_not_turkish() {
        // Locale-sensitive lowering would turn 'I' into a dotless i.
        let key = BreedKey::parse("IBIZAN").unwrap();
        assert_eq!(key.as_str(), "ibizan");
    }

    #[test]
    fn test_serde_normalizes_on_deserialize() {
        let key: BreedKey = serde_json::from_str("\" Poodle \"").unwrap();
        assert_eq!(key.as_str(), "poodle");
        assert!(serde_json::from_str::<BreedKey>("\"  \"").is_err());
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"poodle\"");
    }
}
