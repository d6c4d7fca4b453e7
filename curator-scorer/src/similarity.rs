//! Jaccard token-set similarity ranking.

use std::collections::HashSet;

use curator_core::similarity::sanitise_similarity;
use curator_core::{EXCERPT_CHAR_LIMIT, RankedDocument, SimilarityResult, TextSimilarity};

use crate::recover;

/// Lexical similarity by Jaccard index over whitespace tokens.
///
/// Both texts are lower-cased and collapsed to token sets, so repeated
/// words carry no extra weight. Two empty token sets score 0.0 rather
/// than faulting on the undefined ratio.
///
/// # Examples
/// ```
/// use curator_core::TextSimilarity;
/// use curator_scorer::JaccardRanker;
///
/// let score = JaccardRanker.similarity("machine learning", "machine learning");
/// assert_eq!(score, 1.0);
/// assert_eq!(JaccardRanker.similarity("", ""), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardRanker;

impl TextSimilarity for JaccardRanker {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "Jaccard divides small token-set cardinalities"
    )]
    fn similarity(&self, query: &str, document: &str) -> f32 {
        let query_tokens = token_set(query);
        let document_tokens = token_set(document);
        let union = query_tokens.union(&document_tokens).count();
        // An empty union leaves the ratio undefined; score it as no overlap.
        if union == 0 {
            return 0.0;
        }
        let intersection = query_tokens.intersection(&document_tokens).count();
        Self::sanitise(intersection as f32 / union as f32)
    }
}

fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(ToOwned::to_owned)
        .collect()
}

/// First [`EXCERPT_CHAR_LIMIT`] characters of `document`, marked when cut.
fn excerpt(document: &str) -> String {
    let mut chars = document.chars();
    let mut text: String = chars.by_ref().take(EXCERPT_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        text.push_str("...");
    }
    text
}

/// Rank `documents` against `query`, best match first.
///
/// Produces `min(top_k, documents.len())` records with ranks numbered
/// `1..=len` after sorting; documents with equal scores keep their input
/// order. The operation never fails: a fault in the similarity backend
/// yields an empty ranking.
///
/// `top_k` is assumed pre-validated into `1..=50` by the caller.
#[must_use]
pub fn rank_documents(
    query: &str,
    documents: &[String],
    top_k: usize,
    similarity: &dyn TextSimilarity,
) -> SimilarityResult {
    recover(
        "similarity ranking",
        || rank_batch(query, documents, top_k, similarity),
        SimilarityResult::fallback,
    )
}

fn rank_batch(
    query: &str,
    documents: &[String],
    top_k: usize,
    similarity: &dyn TextSimilarity,
) -> SimilarityResult {
    let mut ranked: Vec<RankedDocument> = documents
        .iter()
        .enumerate()
        .map(|(document_index, document)| RankedDocument {
            document_index,
            excerpt: excerpt(document),
            score: sanitise_similarity(similarity.similarity(query, document)),
            rank: 0,
        })
        .collect();
    // Stable sort: equal scores keep original document order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_k);
    for (position, document) in ranked.iter_mut().enumerate() {
        document.rank = position + 1;
    }
    SimilarityResult {
        ranked,
        query_vector: None,
    }
}
