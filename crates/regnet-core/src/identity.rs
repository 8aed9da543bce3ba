//! # Region Identity
//!
//! `RegionName` is the node key of the graph. Sea and air hub registries are
//! keyed by the same type, which is how hubs, centroids and edges agree on
//! which region they describe.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Unique, human-readable name of a region (e.g. `"South Korea"`).
///
/// Surrounding whitespace is trimmed at construction; the empty string is
/// rejected. Ordering is lexicographic on the trimmed name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionName(String);

impl RegionName {
    /// Create a region name, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, IdentityError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegionName {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegionName> for String {
    fn from(name: RegionName) -> Self {
        name.0
    }
}

impl std::str::FromStr for RegionName {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Borrow<str> for RegionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RegionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_name_trims_whitespace() {
        let name = RegionName::new("  Sri Lanka \n").unwrap();
        assert_eq!(name.as_str(), "Sri Lanka");
    }

    #[test]
    fn region_name_rejects_empty() {
        assert_eq!(RegionName::new(""), Err(IdentityError::EmptyName));
        assert_eq!(RegionName::new("   "), Err(IdentityError::EmptyName));
    }

    #[test]
    fn region_name_orders_lexicographically() {
        let a = RegionName::new("Japan").unwrap();
        let b = RegionName::new("Taiwan").unwrap();
        assert!(a < b);
    }

    #[test]
    fn region_name_serde_roundtrip() {
        let name = RegionName::new("South Korea").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"South Korea\"");
        let parsed: RegionName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn region_name_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<RegionName>("\"  \"").is_err());
    }

    #[test]
    fn region_name_borrow_allows_str_lookup() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(RegionName::new("Vietnam").unwrap(), 1);
        assert_eq!(map.get("Vietnam"), Some(&1));
    }
}
