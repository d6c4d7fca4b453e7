//! Behavioural coverage for quality filtering.

use std::cell::RefCell;

use curator_core::test_support::PanickingQualityScorer;
use curator_core::{ContentItem, FilterResult, Source};
use curator_scorer::{KeywordQualityScorer, filter_content};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn items() -> RefCell<Vec<ContentItem>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn result() -> RefCell<Option<FilterResult>> {
    RefCell::new(None)
}

#[given("an item titled 'New AI Research breakthrough' from 'hackernews'")]
fn given_boosted_item(#[from(items)] items: &RefCell<Vec<ContentItem>>) {
    items.borrow_mut().push(ContentItem::new(
        "item-1",
        "New AI Research breakthrough",
        "",
        Source::HackerNews,
    ));
}

#[given("an item titled 'Morning update' with body 'gossip viral' from 'reddit'")]
fn given_penalised_item(#[from(items)] items: &RefCell<Vec<ContentItem>>) {
    items.borrow_mut().push(ContentItem::new(
        "item-1",
        "Morning update",
        "gossip viral",
        Source::Reddit,
    ));
}

#[when("the batch is filtered at threshold 80")]
fn when_filtered(
    #[from(items)] items: &RefCell<Vec<ContentItem>>,
    #[from(result)] result: &RefCell<Option<FilterResult>>,
) {
    let batch = items.borrow();
    *result.borrow_mut() = Some(filter_content(
        &batch,
        80.0,
        &KeywordQualityScorer::default(),
    ));
}

#[when("the batch is filtered by a faulting scorer")]
fn when_filtered_with_fault(
    #[from(items)] items: &RefCell<Vec<ContentItem>>,
    #[from(result)] result: &RefCell<Option<FilterResult>>,
) {
    let batch = items.borrow();
    *result.borrow_mut() = Some(filter_content(&batch, 80.0, &PanickingQualityScorer));
}

#[then("the item is kept with score {expected:f32}")]
#[expect(clippy::expect_used, reason = "missing result should fail the test")]
fn then_kept(expected: f32, #[from(result)] result: &RefCell<Option<FilterResult>>) {
    let borrowed = result.borrow();
    let outcome = borrowed.as_ref().expect("filter ran");
    assert_eq!(outcome.total_kept, 1);
    assert_eq!(outcome.scores.get("item-1"), Some(expected));
}

#[then("the item is rejected with score {expected:f32}")]
#[expect(clippy::expect_used, reason = "missing result should fail the test")]
fn then_rejected(expected: f32, #[from(result)] result: &RefCell<Option<FilterResult>>) {
    let borrowed = result.borrow();
    let outcome = borrowed.as_ref().expect("filter ran");
    assert_eq!(outcome.total_kept, 0);
    assert_eq!(outcome.total_processed, 1);
    assert_eq!(outcome.scores.get("item-1"), Some(expected));
}

#[scenario(path = "tests/features/quality.feature", index = 0)]
fn boosted_item_is_kept(items: RefCell<Vec<ContentItem>>, result: RefCell<Option<FilterResult>>) {
    let _ = (items, result);
}

#[scenario(path = "tests/features/quality.feature", index = 1)]
fn penalised_item_is_rejected(
    items: RefCell<Vec<ContentItem>>,
    result: RefCell<Option<FilterResult>>,
) {
    let _ = (items, result);
}

#[scenario(path = "tests/features/quality.feature", index = 2)]
fn faulting_scorer_falls_back(
    items: RefCell<Vec<ContentItem>>,
    result: RefCell<Option<FilterResult>>,
) {
    let _ = (items, result);
}
