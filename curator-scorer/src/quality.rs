//! Keyword-based quality scoring and batch filtering.

use std::time::Instant;

use curator_core::quality::sanitise_quality;
use curator_core::{
    ContentItem, DEFAULT_QUALITY_SCORE, FilterResult, QualityScorer, ScoreMap, Source,
};

use crate::recover;

/// Keywords that raise an item's quality score.
const BOOST_KEYWORDS: [&str; 7] = [
    "technology",
    "science",
    "research",
    "ai",
    "programming",
    "innovation",
    "education",
];

/// Keywords that lower an item's quality score.
const PENALTY_KEYWORDS: [&str; 6] = [
    "celebrity",
    "gossip",
    "clickbait",
    "trending",
    "viral",
    "drama",
];

const BOOST_WEIGHT: f32 = 10.0;
const PENALTY_WEIGHT: f32 = 15.0;
const HACKERNEWS_ADJUSTMENT: f32 = 5.0;
const REDDIT_ADJUSTMENT: f32 = -2.0;

/// Quality scorer driven by closed boost and penalty vocabularies.
///
/// Each keyword contributes at most once per item regardless of how often
/// it occurs; the vocabularies act as a cheap, explainable stand-in for a
/// trained classifier. Vocabularies are fixed at construction so tests can
/// inject their own.
///
/// # Examples
/// ```
/// use curator_core::{ContentItem, QualityScorer, Source};
/// use curator_scorer::KeywordQualityScorer;
///
/// let scorer = KeywordQualityScorer::default();
/// let item = ContentItem::new("1", "Celebrity gossip", "viral drama", Source::Reddit);
/// assert_eq!(scorer.score(&item), 13.0);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordQualityScorer {
    boost: Vec<String>,
    penalty: Vec<String>,
}

impl KeywordQualityScorer {
    /// Build a scorer from caller-supplied vocabularies.
    ///
    /// Keywords are matched against lower-cased text, so vocabularies
    /// should be lower-case.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "vocabularies are heap-allocated at runtime"
    )]
    #[must_use]
    pub fn new(boost: Vec<String>, penalty: Vec<String>) -> Self {
        Self { boost, penalty }
    }
}

impl Default for KeywordQualityScorer {
    fn default() -> Self {
        Self::new(
            BOOST_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
            PENALTY_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
        )
    }
}

impl QualityScorer for KeywordQualityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "quality scoring accumulates additive keyword boosts and penalties"
    )]
    fn score(&self, item: &ContentItem) -> f32 {
        let text = item.searchable_text();
        let mut score = DEFAULT_QUALITY_SCORE;
        for keyword in &self.boost {
            if text.contains(keyword.as_str()) {
                score += BOOST_WEIGHT;
            }
        }
        for keyword in &self.penalty {
            if text.contains(keyword.as_str()) {
                score -= PENALTY_WEIGHT;
            }
        }
        score += source_adjustment(&item.source);
        Self::sanitise(score)
    }
}

const fn source_adjustment(source: &Source) -> f32 {
    match source {
        Source::HackerNews => HACKERNEWS_ADJUSTMENT,
        Source::Reddit => REDDIT_ADJUSTMENT,
        Source::Twitter | Source::Other(_) => 0.0,
    }
}

/// Score a batch of items and keep those meeting `threshold`.
///
/// `scores` covers every input; `kept` preserves input order. The
/// operation never fails: a fault in the scorer backend yields the
/// unfiltered batch with [`DEFAULT_QUALITY_SCORE`] for every item.
///
/// `threshold` is assumed pre-validated into `0.0..=100.0` by the caller.
#[must_use]
pub fn filter_content(
    items: &[ContentItem],
    threshold: f32,
    scorer: &dyn QualityScorer,
) -> FilterResult {
    let start = Instant::now();
    recover(
        "quality filter",
        || score_batch(items, threshold, scorer, start),
        || unfiltered_fallback(items, start),
    )
}

fn score_batch(
    items: &[ContentItem],
    threshold: f32,
    scorer: &dyn QualityScorer,
    start: Instant,
) -> FilterResult {
    let mut kept = Vec::new();
    let mut scores = ScoreMap::new();
    for item in items {
        let score = sanitise_quality(scorer.score(item));
        scores.insert(item.id.clone(), score);
        if score >= threshold {
            kept.push(item.clone());
        }
    }
    log::info!(
        "filtered {} items, kept {} (threshold: {threshold})",
        items.len(),
        kept.len(),
    );
    FilterResult {
        total_kept: kept.len(),
        total_processed: items.len(),
        kept,
        scores,
        elapsed: start.elapsed(),
    }
}

/// Fallback: every item kept with the default score.
fn unfiltered_fallback(items: &[ContentItem], start: Instant) -> FilterResult {
    let scores = items
        .iter()
        .map(|item| (item.id.clone(), DEFAULT_QUALITY_SCORE))
        .collect();
    FilterResult {
        kept: items.to_vec(),
        scores,
        total_processed: items.len(),
        total_kept: items.len(),
        elapsed: start.elapsed(),
    }
}
