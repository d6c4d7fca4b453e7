//! Property-based tests for the scoring pipelines.
//!
//! These use `proptest` to assert invariants that must hold for all valid
//! inputs, complementing the example-based unit tests and the BDD
//! behavioural suites.
//!
//! # Invariants tested
//!
//! - **Score ranges:** quality scores stay within `0..=100`; Jaccard
//!   scores stay within `0..=1`.
//! - **Partition consistency:** `total_kept` equals the number of scores
//!   meeting the threshold, and kept items form a subsequence of input.
//! - **Rank numbering:** ranks are exactly `1..=min(top_k, len)`.
//! - **Selection bounds:** recommendations are a bounded subset of the
//!   candidates, with scores keyed only by returned ids.
//! - **Idempotence:** re-running a pipeline reproduces the same output.

use proptest::prelude::*;

use curator_core::{ContentItem, Source, TextSimilarity};
use curator_scorer::{
    HybridRecommender, JaccardRanker, KeywordQualityScorer, filter_content, rank_documents,
    recommend,
};

fn source_strategy() -> impl Strategy<Value = Source> {
    prop_oneof![
        Just(Source::HackerNews),
        Just(Source::Reddit),
        Just(Source::Twitter),
        "[a-z]{1,8}".prop_map(Source::from),
    ]
}

fn item_strategy() -> impl Strategy<Value = ContentItem> {
    ("[a-zA-Z ]{0,40}", "[a-zA-Z ]{0,80}", source_strategy())
        .prop_map(|(title, content, source)| ContentItem::new("pending", title, content, source))
}

/// Batches with unique, stable identifiers.
fn batch_strategy(max_len: usize) -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(item_strategy(), 0..max_len).prop_map(|mut items| {
        for (index, item) in items.iter_mut().enumerate() {
            item.id = format!("item-{index}");
        }
        items
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every quality score is finite and within `0..=100`, and
    /// the kept count equals the number of scores meeting the threshold.
    #[test]
    fn filter_scores_stay_in_range_and_partition_consistently(
        items in batch_strategy(8),
        threshold in 0.0_f32..=100.0_f32,
    ) {
        let result = filter_content(&items, threshold, &KeywordQualityScorer::default());

        prop_assert_eq!(result.total_processed, items.len());
        prop_assert_eq!(result.scores.len(), items.len());
        for (_, score) in result.scores.iter() {
            prop_assert!(score.is_finite());
            prop_assert!((0.0..=100.0).contains(&score));
        }
        let meeting = result
            .scores
            .iter()
            .filter(|&(_, score)| score >= threshold)
            .count();
        prop_assert_eq!(result.total_kept, meeting);
        prop_assert_eq!(result.kept.len(), result.total_kept);
    }

    /// Property: kept items appear in the same relative order as the input.
    #[test]
    fn filter_preserves_input_order(items in batch_strategy(8)) {
        let result = filter_content(&items, 50.0, &KeywordQualityScorer::default());

        let input_ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        let mut cursor = 0;
        for kept in &result.kept {
            let position = input_ids
                .iter()
                .skip(cursor)
                .position(|&id| id == kept.id);
            prop_assert!(position.is_some(), "kept item out of order: {}", kept.id);
            cursor += position.unwrap_or(0) + 1;
        }
    }

    /// Property: Jaccard similarity is symmetric and within `0..=1`.
    #[test]
    fn jaccard_is_symmetric_and_bounded(
        left in "[a-z ]{0,60}",
        right in "[a-z ]{0,60}",
    ) {
        let forward = JaccardRanker.similarity(&left, &right);
        let backward = JaccardRanker.similarity(&right, &left);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(forward, backward);
    }

    /// Property: ranks are exactly `1..=min(top_k, len)` with no gaps and
    /// scores are sorted descending.
    #[test]
    fn ranking_numbers_ranks_densely(
        documents in prop::collection::vec("[a-z ]{0,60}", 0..8),
        query in "[a-z ]{0,30}",
        top_k in 1_usize..=50,
    ) {
        let result = rank_documents(&query, &documents, top_k, &JaccardRanker);

        prop_assert_eq!(result.ranked.len(), top_k.min(documents.len()));
        let mut previous = f32::INFINITY;
        for (position, document) in result.ranked.iter().enumerate() {
            prop_assert_eq!(document.rank, position + 1);
            prop_assert!(document.score <= previous);
            prop_assert!(document.document_index < documents.len());
            previous = document.score;
        }
    }

    /// Property: recommendations are a bounded subset of the candidates
    /// and scores cover exactly the returned items.
    #[test]
    fn recommendations_are_a_bounded_subset(
        history in batch_strategy(4),
        candidates in batch_strategy(8),
        limit in 1_usize..=50,
    ) {
        let result = recommend("user", &history, &candidates, limit, &HybridRecommender);

        prop_assert!(result.recommendations.len() <= limit);
        prop_assert_eq!(result.scores.len(), result.recommendations.len());
        for recommended in &result.recommendations {
            prop_assert!(candidates.iter().any(|c| c.id == recommended.id));
            prop_assert!(result.scores.get(&recommended.id).is_some());
        }
    }

    /// Property: pipelines are pure; re-running reproduces the output
    /// (elapsed time aside).
    #[test]
    fn pipelines_are_idempotent(
        items in batch_strategy(6),
        threshold in 0.0_f32..=100.0_f32,
    ) {
        let scorer = KeywordQualityScorer::default();
        let first = filter_content(&items, threshold, &scorer);
        let second = filter_content(&items, threshold, &scorer);
        prop_assert_eq!(first.kept, second.kept);
        prop_assert_eq!(first.scores, second.scores);

        let documents: Vec<String> = items.iter().map(|i| i.content.clone()).collect();
        let ranked_first = rank_documents("query words", &documents, 5, &JaccardRanker);
        let ranked_second = rank_documents("query words", &documents, 5, &JaccardRanker);
        prop_assert_eq!(ranked_first, ranked_second);
    }
}
