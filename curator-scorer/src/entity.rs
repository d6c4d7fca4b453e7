//! Keyword-based entity extraction.

use std::collections::HashSet;

use curator_core::{EntityCategory, EntityModel, EntityResult};

use crate::recover;

/// Confidence reported for every category in the success path.
///
/// Deliberately a fixed constant, independent of match count and text
/// length; the keyword scan has no signal to grade itself on.
pub const MATCH_CONFIDENCE: f32 = 0.8;

/// Role and title keywords matched case-insensitively.
const PEOPLE_KEYWORDS: [&str; 5] = ["CEO", "founder", "researcher", "developer", "scientist"];

/// Organisation proper nouns matched case-sensitively against raw text.
const ORGANIZATION_KEYWORDS: [&str; 7] =
    ["OpenAI", "Google", "Microsoft", "Apple", "Meta", "Tesla", "NASA"];

/// Topic keywords matched case-insensitively.
const TOPIC_KEYWORDS: [&str; 6] = [
    "AI",
    "machine learning",
    "blockchain",
    "cryptocurrency",
    "startups",
    "technology",
];

/// Entity extractor driven by closed keyword vocabularies.
///
/// Each keyword is checked for presence once; a match appends the
/// canonical keyword (not the matched span) in vocabulary order.
/// Organisation names are scanned against the raw text because the
/// vocabulary is itself a set of proper nouns; people and topics are
/// scanned case-insensitively.
///
/// # Examples
/// ```
/// use curator_core::{EntityCategory, EntityModel};
/// use curator_scorer::KeywordEntityExtractor;
///
/// let extractor = KeywordEntityExtractor::default();
/// let result = extractor.extract(
///     "OpenAI CEO announces new AI research",
///     &EntityCategory::ALL,
/// );
/// assert_eq!(
///     result.entities.get(&EntityCategory::Organizations),
///     Some(&vec!["OpenAI".to_owned()]),
/// );
/// assert_eq!(result.confidence.get(&EntityCategory::People), Some(&0.8));
/// ```
#[derive(Debug, Clone)]
pub struct KeywordEntityExtractor {
    people: Vec<String>,
    organizations: Vec<String>,
    topics: Vec<String>,
}

impl KeywordEntityExtractor {
    /// Build an extractor from caller-supplied vocabularies.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "vocabularies are heap-allocated at runtime"
    )]
    #[must_use]
    pub fn new(people: Vec<String>, organizations: Vec<String>, topics: Vec<String>) -> Self {
        Self {
            people,
            organizations,
            topics,
        }
    }

    fn matches_for(&self, category: EntityCategory, text: &str, lowered: &str) -> Vec<String> {
        match category {
            EntityCategory::People => scan_insensitive(&self.people, lowered),
            EntityCategory::Organizations => scan_sensitive(&self.organizations, text),
            EntityCategory::Topics => scan_insensitive(&self.topics, lowered),
        }
    }
}

impl Default for KeywordEntityExtractor {
    fn default() -> Self {
        Self::new(
            PEOPLE_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
            ORGANIZATION_KEYWORDS
                .iter()
                .map(|&k| k.to_owned())
                .collect(),
            TOPIC_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
        )
    }
}

impl EntityModel for KeywordEntityExtractor {
    fn extract(&self, text: &str, categories: &[EntityCategory]) -> EntityResult {
        let lowered = text.to_lowercase();
        let mut result = EntityResult::new();
        for category in deduplicate(categories) {
            let matches = self.matches_for(category, text, &lowered);
            result.insert(category, matches, MATCH_CONFIDENCE);
        }
        result
    }
}

fn scan_insensitive(keywords: &[String], lowered_text: &str) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| lowered_text.contains(keyword.to_lowercase().as_str()))
        .cloned()
        .collect()
}

fn scan_sensitive(keywords: &[String], text: &str) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .cloned()
        .collect()
}

/// Preserve request order while dropping repeated categories.
fn deduplicate(categories: &[EntityCategory]) -> Vec<EntityCategory> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .copied()
        .filter(|category| seen.insert(*category))
        .collect()
}

/// Extract entities for the requested categories.
///
/// The operation never fails: a fault in the model backend yields every
/// requested category mapped to an empty list with confidence 0.0.
/// Unrequested categories are absent from the result entirely.
#[must_use]
pub fn extract_entities(
    text: &str,
    categories: &[EntityCategory],
    model: &dyn EntityModel,
) -> EntityResult {
    recover(
        "entity extraction",
        || model.extract(text, categories),
        || EntityResult::fallback(categories),
    )
}
