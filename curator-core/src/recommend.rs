//! Recommendation contract and result types.

use crate::{ContentItem, InterestProfile, ScoreMap};

/// Upper bound for the `max_recommendations` request parameter.
pub const MAX_RECOMMENDATION_LIMIT: usize = 50;

/// Guard a raw relevance score.
///
/// Non-finite and negative values become 0.0. There is no upper clamp:
/// relevance is additive per matching topic and deliberately unbounded,
/// unlike quality scores.
#[must_use]
pub fn sanitise_relevance(score: f32) -> f32 {
    if !score.is_finite() || score < 0.0 {
        return 0.0;
    }
    score
}

/// Calculate how relevant a candidate item is to a user's interests.
///
/// Implementations must be thread-safe and infallible; the recommendation
/// pipeline substitutes [`RecommendationResult::fallback`] when an
/// implementation panics.
pub trait RelevanceScorer: Send + Sync {
    /// Return a relevance score for `item` according to `profile`.
    fn score(&self, item: &ContentItem, profile: &InterestProfile) -> f32;

    /// Validate a raw score; see [`sanitise_relevance`].
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        sanitise_relevance(score)
    }
}

/// Identifies the strategy that produced a recommendation set.
///
/// # Examples
/// ```
/// use curator_core::Algorithm;
///
/// assert_eq!(
///     Algorithm::HybridCollaborativeContent.as_str(),
///     "hybrid_collaborative_content",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Interest-profile matching blended with source preference.
    HybridCollaborativeContent,
    /// Safe default emitted when scoring faulted.
    Fallback,
}

impl Algorithm {
    /// Return the algorithm tag as its canonical string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HybridCollaborativeContent => "hybrid_collaborative_content",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranked recommendations for one user.
///
/// `scores` covers exactly the returned items, never the full candidate
/// set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationResult {
    /// Selected candidates, highest score first.
    pub recommendations: Vec<ContentItem>,
    /// Score for each returned item.
    pub scores: ScoreMap,
    /// Strategy that produced the set.
    pub algorithm: Algorithm,
}

impl RecommendationResult {
    /// Fallback result: no recommendations, tagged [`Algorithm::Fallback`].
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            recommendations: Vec::new(),
            scores: ScoreMap::new(),
            algorithm: Algorithm::Fallback,
        }
    }
}

/// Parameters for a recommendation invocation.
///
/// # Examples
/// ```
/// use curator_core::RecommendationRequest;
///
/// let json = r#"{"user_id": "u1", "content_history": [], "candidate_items": []}"#;
/// let request: RecommendationRequest = serde_json::from_str(json).expect("valid JSON");
/// assert_eq!(request.max_recommendations, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationRequest {
    /// User the recommendations are for.
    pub user_id: String,
    /// Items the user has already read.
    pub content_history: Vec<ContentItem>,
    /// Items to rank for the user.
    pub candidate_items: Vec<ContentItem>,
    /// Maximum number of recommendations, in `1..=50`.
    #[cfg_attr(feature = "serde", serde(default = "default_max_recommendations"))]
    pub max_recommendations: usize,
}

const fn default_max_recommendations() -> usize {
    10
}
