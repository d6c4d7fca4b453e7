//! Quality scoring contract and filter result types.
//!
//! The [`QualityScorer`] trait assigns a 0–100 quality score to a
//! [`ContentItem`](crate::ContentItem). The keyword heuristic in
//! `curator-scorer` implements it today; a model-backed classifier can
//! replace it without changing the filter pipeline's shape.

use std::time::Duration;

use crate::{ContentItem, ScoreMap};

/// Score assigned when no signal is available or scoring faults.
pub const DEFAULT_QUALITY_SCORE: f32 = 75.0;

/// Upper bound of the quality score range.
pub const MAX_QUALITY_SCORE: f32 = 100.0;

/// Guard a raw quality score.
///
/// Non-finite values fall back to [`DEFAULT_QUALITY_SCORE`]; everything
/// else is clamped into `0.0..=100.0`.
///
/// # Examples
/// ```
/// use curator_core::quality::sanitise_quality;
///
/// assert_eq!(sanitise_quality(120.0), 100.0);
/// assert_eq!(sanitise_quality(f32::NAN), 75.0);
/// ```
#[must_use]
pub fn sanitise_quality(score: f32) -> f32 {
    if !score.is_finite() {
        return DEFAULT_QUALITY_SCORE;
    }
    score.clamp(0.0, MAX_QUALITY_SCORE)
}

/// Calculate a quality score for a content item.
///
/// Higher scores indicate content worth keeping. Implementations must be
/// thread-safe (`Send` + `Sync`) so batches can be scored across threads,
/// and infallible; the filter pipeline supplies the fallback behaviour
/// when an implementation panics.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Stay within `0.0..=100.0`.
///
/// Use [`QualityScorer::sanitise`] to apply these guards.
pub trait QualityScorer: Send + Sync {
    /// Return a quality score for `item` in `0.0..=100.0`.
    fn score(&self, item: &ContentItem) -> f32;

    /// Clamp and validate a raw score; see [`sanitise_quality`].
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        sanitise_quality(score)
    }
}

/// Outcome of filtering a batch of items by quality.
///
/// `kept` preserves the input order of the surviving items; `scores`
/// covers every input, kept or not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterResult {
    /// Items whose score met the threshold, in input order.
    pub kept: Vec<ContentItem>,
    /// Score for every processed item, kept or rejected.
    pub scores: ScoreMap,
    /// Number of items scored.
    pub total_processed: usize,
    /// Number of items kept.
    pub total_kept: usize,
    /// Wall-clock time spent scoring the batch.
    pub elapsed: Duration,
}

/// Parameters for a filter invocation.
///
/// `criteria` is accepted for interface compatibility but not consulted
/// by the keyword heuristic; it is an intentionally inert surface kept
/// for future criterion-specific rule selection.
///
/// # Examples
/// ```
/// use curator_core::FilterRequest;
///
/// let request: FilterRequest = serde_json::from_str(r#"{"items": []}"#).expect("valid JSON");
/// assert_eq!(request.filter_strength, 80.0);
/// assert_eq!(request.criteria.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterRequest {
    /// Batch of items to score.
    pub items: Vec<ContentItem>,
    /// Keep threshold in `0.0..=100.0`.
    #[cfg_attr(feature = "serde", serde(default = "default_filter_strength"))]
    pub filter_strength: f32,
    /// Requested filter criteria (currently inert).
    #[cfg_attr(feature = "serde", serde(default = "default_criteria"))]
    pub criteria: Vec<String>,
}

impl FilterRequest {
    /// Build a request for `items` with the default strength and criteria.
    #[must_use]
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            filter_strength: default_filter_strength(),
            criteria: default_criteria(),
        }
    }
}

const fn default_filter_strength() -> f32 {
    80.0
}

fn default_criteria() -> Vec<String> {
    vec![
        "relevance".to_owned(),
        "quality".to_owned(),
        "anti_brain_rot".to_owned(),
    ]
}
