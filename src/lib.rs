//! Facade crate for the curator content scoring engine.
//!
//! This crate re-exports the core domain types and exposes the heuristic
//! scorer implementations behind a feature flag so callers can depend on a
//! single crate while model-backed scorers remain swappable.

#![forbid(unsafe_code)]

pub use curator_core::{
    Algorithm, ContentItem, EntityCategory, EntityModel, EntityRequest, EntityResult,
    FilterRequest, FilterResult, InterestProfile, ModelRegistry, QualityScorer, RankedDocument,
    RecommendationRequest, RecommendationResult, RelevanceScorer, ScoreMap, SimilarityRequest,
    SimilarityResult, Source, TextSimilarity, Topic,
};

#[cfg(feature = "scorer")]
pub use curator_scorer::{
    HybridRecommender, JaccardRanker, KeywordEntityExtractor, KeywordQualityScorer,
    extract_entities, filter_content, profile_from_history, rank_documents, recommend,
};
