//! Core domain types for the curator content scoring engine.
//!
//! The crate defines the shared content representation, the result types
//! produced by the four scoring pipelines, and the traits behind which the
//! heuristic scorers (and any future model-backed replacements) sit. Types
//! carry basic validation helpers to keep downstream components honest;
//! scoring itself lives in `curator-scorer`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod content;
pub mod entity;
pub mod profile;
pub mod quality;
pub mod recommend;
pub mod registry;
pub mod score;
pub mod similarity;
pub mod topic;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use content::{ContentItem, Source};
pub use entity::{EntityCategory, EntityModel, EntityRequest, EntityResult, ParseCategoryError};
pub use profile::InterestProfile;
pub use quality::{
    DEFAULT_QUALITY_SCORE, FilterRequest, FilterResult, MAX_QUALITY_SCORE, QualityScorer,
};
pub use recommend::{
    Algorithm, MAX_RECOMMENDATION_LIMIT, RecommendationRequest, RecommendationResult,
    RelevanceScorer,
};
pub use registry::ModelRegistry;
pub use score::ScoreMap;
pub use similarity::{
    EXCERPT_CHAR_LIMIT, MAX_TOP_K, RankedDocument, SimilarityRequest, SimilarityResult,
    TextSimilarity,
};
pub use topic::{ParseTopicError, Topic};
