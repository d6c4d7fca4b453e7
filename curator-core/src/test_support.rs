//! Test-only scorer doubles used by unit and behaviour tests.
//!
//! The panicking variants exercise the pipelines' fault-swallowing
//! boundaries; the constant variants pin scores for selection logic tests.

use crate::{
    ContentItem, EntityCategory, EntityModel, EntityResult, InterestProfile, QualityScorer,
    RelevanceScorer, TextSimilarity,
};

/// Quality scorer returning a fixed score for every item.
#[derive(Debug, Clone, Copy)]
pub struct ConstantQualityScorer(pub f32);

impl QualityScorer for ConstantQualityScorer {
    fn score(&self, _item: &ContentItem) -> f32 {
        self.0
    }
}

/// Quality scorer that always panics, simulating an internal fault.
#[derive(Debug, Clone, Copy)]
pub struct PanickingQualityScorer;

impl QualityScorer for PanickingQualityScorer {
    fn score(&self, _item: &ContentItem) -> f32 {
        panic!("simulated quality model fault")
    }
}

/// Relevance scorer that always panics, simulating an internal fault.
#[derive(Debug, Clone, Copy)]
pub struct PanickingRelevanceScorer;

impl RelevanceScorer for PanickingRelevanceScorer {
    fn score(&self, _item: &ContentItem, _profile: &InterestProfile) -> f32 {
        panic!("simulated relevance model fault")
    }
}

/// Similarity backend that always panics, simulating an internal fault.
#[derive(Debug, Clone, Copy)]
pub struct PanickingSimilarity;

impl TextSimilarity for PanickingSimilarity {
    fn similarity(&self, _query: &str, _document: &str) -> f32 {
        panic!("simulated similarity model fault")
    }
}

/// Entity model that always panics, simulating an internal fault.
#[derive(Debug, Clone, Copy)]
pub struct PanickingEntityModel;

impl EntityModel for PanickingEntityModel {
    fn extract(&self, _text: &str, _categories: &[EntityCategory]) -> EntityResult {
        panic!("simulated entity model fault")
    }
}
