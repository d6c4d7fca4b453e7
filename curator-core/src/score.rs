//! Score maps keyed by content identifier.

use std::collections::BTreeMap;

/// Scores keyed by item or document identifier.
///
/// The map is rebuilt fresh on every scoring call and covers each input
/// exactly once. Iteration order follows the identifiers, which keeps
/// serialised output deterministic.
///
/// # Examples
/// ```
/// use curator_core::ScoreMap;
///
/// let mut scores = ScoreMap::new();
/// scores.insert("item-1", 75.0);
/// assert_eq!(scores.get("item-1"), Some(75.0));
/// assert_eq!(scores.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScoreMap {
    scores: BTreeMap<String, f32>,
}

impl ScoreMap {
    /// Construct an empty score map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score for an identifier, replacing any previous value.
    pub fn insert(&mut self, id: impl Into<String>, score: f32) {
        self.scores.insert(id.into(), score);
    }

    /// Return the score for an identifier, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f32> {
        self.scores.get(id).copied()
    }

    /// Number of scored identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether any scores are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(identifier, score)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, f32> {
        self.scores
    }
}

impl FromIterator<(String, f32)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (String, f32)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}
