//! Entity extraction contract and result types.

use std::collections::BTreeMap;

use thiserror::Error;

/// Categories of entity the extractor understands.
///
/// # Examples
/// ```
/// use curator_core::EntityCategory;
///
/// assert_eq!(EntityCategory::People.as_str(), "people");
/// assert_eq!("topics".parse::<EntityCategory>(), Ok(EntityCategory::Topics));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityCategory {
    /// Roles and titles of people.
    People,
    /// Organisation proper nouns.
    Organizations,
    /// Subject-matter topics.
    Topics,
}

impl EntityCategory {
    /// All supported categories, in canonical order.
    pub const ALL: [Self; 3] = [Self::People, Self::Organizations, Self::Topics];

    /// Return the category as its lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Organizations => "organizations",
            Self::Topics => "topics",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported entity category '{0}'")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for EntityCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "people" => Ok(Self::People),
            "organizations" => Ok(Self::Organizations),
            "topics" => Ok(Self::Topics),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

/// Entities detected in a piece of text, grouped by category.
///
/// The key sets of `entities` and `confidence` are always identical and
/// cover exactly the requested categories. Matches within a category keep
/// detection order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityResult {
    /// Matched entity strings per requested category.
    pub entities: BTreeMap<EntityCategory, Vec<String>>,
    /// Per-category confidence in `0.0..=1.0`.
    pub confidence: BTreeMap<EntityCategory, f32>,
}

impl EntityResult {
    /// Construct an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a category's matches together with its confidence.
    pub fn insert(&mut self, category: EntityCategory, matches: Vec<String>, confidence: f32) {
        self.entities.insert(category, matches);
        self.confidence.insert(category, confidence);
    }

    /// Fallback result: every requested category empty with confidence 0.
    ///
    /// This is the documented substitute when extraction faults; the
    /// caller still sees every category it asked for.
    #[must_use]
    pub fn fallback(categories: &[EntityCategory]) -> Self {
        let mut result = Self::new();
        for &category in categories {
            result.insert(category, Vec::new(), 0.0);
        }
        result
    }
}

/// Extract entities from text.
///
/// Implementations must be thread-safe and infallible; the extraction
/// pipeline substitutes [`EntityResult::fallback`] when an implementation
/// panics. Categories absent from `categories` must be absent from the
/// result.
pub trait EntityModel: Send + Sync {
    /// Scan `text` for entities in the requested categories.
    fn extract(&self, text: &str, categories: &[EntityCategory]) -> EntityResult;
}

/// Parameters for an extraction invocation.
///
/// # Examples
/// ```
/// use curator_core::{EntityCategory, EntityRequest};
///
/// let request: EntityRequest = serde_json::from_str(r#"{"text": "hi"}"#).expect("valid JSON");
/// assert_eq!(request.extract_types, EntityCategory::ALL);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRequest {
    /// Text to scan.
    pub text: String,
    /// Categories to extract; defaults to all supported categories.
    #[cfg_attr(feature = "serde", serde(default = "default_extract_types"))]
    pub extract_types: Vec<EntityCategory>,
}

impl EntityRequest {
    /// Build a request scanning `text` for all supported categories.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extract_types: default_extract_types(),
        }
    }
}

fn default_extract_types() -> Vec<EntityCategory> {
    EntityCategory::ALL.to_vec()
}
