//! Heuristic scoring pipelines for curator content.
//!
//! The crate provides four independent pipelines behind the traits defined
//! in [`curator_core`]:
//! - **Quality filtering** scores items 0–100 from keyword and source
//!   signals and partitions a batch by a caller-supplied threshold.
//! - **Entity extraction** scans text for people, organisation, and topic
//!   keyword matches with a fixed per-category confidence.
//! - **Similarity ranking** orders documents against a query by Jaccard
//!   token-set overlap.
//! - **Recommendation** derives an interest profile from reading history
//!   and ranks candidates against it.
//!
//! Every pipeline shares one failure posture: it never fails the caller.
//! A fault in a plugged-in scorer backend is caught at the pipeline
//! boundary, logged, and replaced with the documented fallback result.
//!
//! # Examples
//!
//! ```
//! use curator_core::{ContentItem, Source};
//! use curator_scorer::{KeywordQualityScorer, filter_content};
//!
//! let items = vec![ContentItem::new(
//!     "1",
//!     "New AI research breakthrough",
//!     "",
//!     Source::HackerNews,
//! )];
//! let result = filter_content(&items, 80.0, &KeywordQualityScorer::default());
//! assert_eq!(result.total_kept, 1);
//! assert_eq!(result.scores.get("1"), Some(100.0));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

mod entity;
mod quality;
mod recommend;
mod similarity;

pub use entity::{KeywordEntityExtractor, MATCH_CONFIDENCE, extract_entities};
pub use quality::{KeywordQualityScorer, filter_content};
pub use recommend::{HybridRecommender, profile_from_history, recommend};
pub use similarity::{JaccardRanker, rank_documents};

/// Run `attempt`, substituting `fallback` when it panics.
///
/// This is the shared never-fail boundary: the fault is reported through
/// the log facade only, never to the caller.
pub(crate) fn recover<T>(
    operation: &'static str,
    attempt: impl FnOnce() -> T,
    fallback: impl FnOnce() -> T,
) -> T {
    match catch_unwind(AssertUnwindSafe(attempt)) {
        Ok(value) => value,
        Err(panic) => {
            log::error!(
                "{operation} fault, substituting fallback result: {}",
                panic_message(panic.as_ref())
            );
            fallback()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("opaque panic payload")
}
