use crate::utils::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Opaque catalog item identifier, e.g. `CouchProduct1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The set of products the user marked as favorite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    members: HashSet<ProductId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Returns `false` when the id was already present.
    pub fn insert(&mut self, id: ProductId) -> bool {
        self.members.insert(id)
    }

    /// Returns `false` when the id was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        self.members.remove(id)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.members.iter()
    }

    /// Members in a stable order. Order carries no meaning, it only keeps the
    /// persisted form deterministic.
    pub fn to_sorted_vec(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.members.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Encode as a JSON array of id strings.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_sorted_vec())?)
    }

    /// Decode a JSON array of id strings. Duplicates collapse.
    pub fn from_json(raw: &str) -> Result<Self> {
        let ids: Vec<ProductId> = serde_json::from_str(raw)?;
        Ok(ids.into_iter().collect())
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::He];

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Accepts only the exact recognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "he" => Some(Language::He),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::He => Direction::Rtl,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::En => Language::He,
            Language::He => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_tag(s.trim()).ok_or_else(|| StoreError::InvalidLanguageTag {
            tag: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active display language. Direction is always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalePreference {
    language: Language,
}

impl LocalePreference {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }
}

/// Where an initial value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Decoded from the persisted value.
    Stored,
    /// Nothing was persisted under the key.
    Missing,
    /// The persisted value was unusable and the default was substituted.
    RecoveredDefault { reason: String },
}

impl LoadOrigin {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOrigin::RecoveredDefault { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub origin: LoadOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    Added(ProductId),
    Removed(ProductId),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleEvent {
    pub previous: Language,
    pub current: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_set_json_is_sorted_array() {
        let set: FavoriteSet = ["CouchProduct2", "BedProduct1"]
            .into_iter()
            .map(ProductId::from)
            .collect();
        assert_eq!(
            set.to_json().unwrap(),
            r#"["BedProduct1","CouchProduct2"]"#
        );
    }

    #[test]
    fn test_favorite_set_from_json_collapses_duplicates() {
        let set = FavoriteSet::from_json(r#"["a","a","b"]"#).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_favorite_set_rejects_non_array() {
        assert!(FavoriteSet::from_json("not json").is_err());
        assert!(FavoriteSet::from_json(r#"{"a":1}"#).is_err());
        assert!(FavoriteSet::from_json("[1,2]").is_err());
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::from_tag("he"), Some(Language::He));
        assert_eq!(Language::from_tag("HE"), None);
        assert_eq!(Language::from_tag("fr"), None);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_direction_is_derived() {
        for language in Language::ALL {
            let pref = LocalePreference::new(language);
            assert_eq!(pref.is_rtl(), language == Language::He);
        }
        assert_eq!(Language::He.direction().as_str(), "rtl");
        assert_eq!(Language::En.direction().as_str(), "ltr");
    }
}
