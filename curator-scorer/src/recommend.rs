//! Interest-profile recommendation scoring.

use curator_core::recommend::sanitise_relevance;
use curator_core::{
    Algorithm, ContentItem, InterestProfile, RecommendationResult, RelevanceScorer, Source, Topic,
};

use crate::recover;

const BASE_RELEVANCE: f32 = 0.5;
const TOPIC_BONUS: f32 = 0.3;
const SOURCE_BONUS: f32 = 0.2;

/// Derive an interest profile from a user's reading history.
///
/// Each topic is a presence flag across the whole history, not a weighted
/// count. Matching is bare substring containment over the lower-cased
/// title and body, so "ai" inside a longer word still counts.
///
/// # Examples
/// ```
/// use curator_core::{ContentItem, Source, Topic};
/// use curator_scorer::profile_from_history;
///
/// let history = vec![ContentItem::new(
///     "1",
///     "Why startups adopt artificial intelligence",
///     "",
///     Source::HackerNews,
/// )];
/// let profile = profile_from_history(&history);
/// assert!(profile.contains(Topic::Ai));
/// assert!(profile.contains(Topic::Startups));
/// assert!(!profile.contains(Topic::Technology));
/// ```
#[must_use]
pub fn profile_from_history(history: &[ContentItem]) -> InterestProfile {
    let mut profile = InterestProfile::new();
    for item in history {
        let text = item.searchable_text();
        if text.contains("ai") || text.contains("artificial intelligence") {
            profile.insert(Topic::Ai);
        }
        if text.contains("tech") || text.contains("technology") {
            profile.insert(Topic::Technology);
        }
        if text.contains("startup") {
            profile.insert(Topic::Startups);
        }
    }
    profile
}

/// Relevance scorer blending interest matches with source preference.
///
/// Scores start at 0.5 and gain 0.3 per profile topic found in the
/// candidate's text, plus 0.2 for Hacker News items when the profile
/// contains [`Topic::Technology`]. The sum is additive and deliberately
/// unclamped above 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridRecommender;

impl RelevanceScorer for HybridRecommender {
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance scoring accumulates additive topic bonuses"
    )]
    fn score(&self, item: &ContentItem, profile: &InterestProfile) -> f32 {
        let text = item.searchable_text();
        let mut score = BASE_RELEVANCE;
        for topic in profile.iter() {
            if text.contains(topic.as_str()) {
                score += TOPIC_BONUS;
            }
        }
        if item.source == Source::HackerNews && profile.contains(Topic::Technology) {
            score += SOURCE_BONUS;
        }
        Self::sanitise(score)
    }
}

/// Recommend up to `max_recommendations` candidates for a user.
///
/// The profile is derived from `history`, candidates are scored against
/// it, and the highest-scoring candidates are returned in descending
/// score order with ties keeping input order. `scores` covers only the
/// returned items. The operation never fails: a fault in the scorer
/// backend yields an empty set tagged [`Algorithm::Fallback`].
///
/// `max_recommendations` is assumed pre-validated into `1..=50` by the
/// caller.
#[must_use]
pub fn recommend(
    user_id: &str,
    history: &[ContentItem],
    candidates: &[ContentItem],
    max_recommendations: usize,
    scorer: &dyn RelevanceScorer,
) -> RecommendationResult {
    recover(
        "recommendation",
        || select_candidates(user_id, history, candidates, max_recommendations, scorer),
        RecommendationResult::fallback,
    )
}

fn select_candidates(
    user_id: &str,
    history: &[ContentItem],
    candidates: &[ContentItem],
    max_recommendations: usize,
    scorer: &dyn RelevanceScorer,
) -> RecommendationResult {
    let profile = profile_from_history(history);
    let mut scored: Vec<(ContentItem, f32)> = candidates
        .iter()
        .map(|item| {
            let score = sanitise_relevance(scorer.score(item, &profile));
            (item.clone(), score)
        })
        .collect();
    // Stable sort: equal scores keep original candidate order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(max_recommendations);

    let scores = scored
        .iter()
        .map(|(item, score)| (item.id.clone(), *score))
        .collect();
    let recommendations: Vec<ContentItem> = scored.into_iter().map(|(item, _)| item).collect();
    log::info!(
        "generated {} recommendations for user {user_id}",
        recommendations.len(),
    );
    RecommendationResult {
        recommendations,
        scores,
        algorithm: Algorithm::HybridCollaborativeContent,
    }
}
