use super::common::*;

use crate::assessment::catalog::{PersonalityCategory, QuestionCatalog};
use crate::assessment::scoring::{aggregate_responses, normalized_score, pattern_complexity};

#[test]
fn aggregates_cover_every_catalog_category_without_responses() {
    let catalog = QuestionCatalog::standard();
    let aggregates = aggregate_responses(&catalog, &[]);

    assert_eq!(aggregates.len(), 6);
    for aggregate in &aggregates {
        assert!(aggregate.scores.is_empty());
        assert!(!aggregate.dimensions.is_empty(), "catalog dimensions seeded");
        assert!(aggregate.dimensions.values().all(|scores| scores.is_empty()));
    }
}

#[test]
fn category_order_matches_catalog_first_appearance() {
    let catalog = QuestionCatalog::standard();

    // Submit answers in reverse catalog order; output order must not follow.
    let mut responses = full_responses(4);
    responses.reverse();

    let aggregates = aggregate_responses(&catalog, &responses);
    let order: Vec<PersonalityCategory> = aggregates.iter().map(|a| a.category).collect();
    assert_eq!(order, catalog.category_order());
    assert_eq!(order[0], PersonalityCategory::Emotion);
    assert_eq!(order[5], PersonalityCategory::Resilience);
}

#[test]
fn reverse_scored_answers_are_inverted() {
    let catalog = QuestionCatalog::standard();
    let aggregates = aggregate_responses(&catalog, &[response("emotion_3", 1)]);

    let emotion = aggregates
        .iter()
        .find(|a| a.category == PersonalityCategory::Emotion)
        .expect("emotion aggregate present");
    assert_eq!(emotion.scores, vec![7]);
    assert_eq!(
        emotion.dimensions.get("Rationality").map(Vec::as_slice),
        Some([7u8].as_slice())
    );
}

#[test]
fn plain_answers_pass_through_unchanged() {
    let catalog = QuestionCatalog::standard();
    let aggregates = aggregate_responses(&catalog, &[response("emotion_1", 2)]);

    let emotion = aggregates
        .iter()
        .find(|a| a.category == PersonalityCategory::Emotion)
        .expect("emotion aggregate present");
    assert_eq!(emotion.scores, vec![2]);
}

#[test]
fn unknown_question_ids_are_dropped() {
    let catalog = QuestionCatalog::standard();
    let with_bogus = aggregate_responses(
        &catalog,
        &[response("emotion_1", 5), response("not_a_question", 7)],
    );
    let without_bogus = aggregate_responses(&catalog, &[response("emotion_1", 5)]);

    assert_eq!(with_bogus, without_bogus);
}

#[test]
fn normalization_maps_likert_extremes() {
    assert_eq!(normalized_score(&[7, 7, 7]), 100);
    assert_eq!(normalized_score(&[4, 4, 4]), 50);
    assert_eq!(normalized_score(&[1, 1, 1]), 0);
}

#[test]
fn normalization_rounds_to_nearest() {
    // mean 6.5 -> 91.67 -> 92
    assert_eq!(normalized_score(&[7, 6]), 92);
    // mean 1.5 -> 8.33 -> 8
    assert_eq!(normalized_score(&[1, 2]), 8);
}

#[test]
fn empty_score_list_normalizes_to_zero() {
    assert_eq!(normalized_score(&[]), 0);
}

#[test]
fn complexity_is_zero_for_uniform_scores() {
    assert_eq!(pattern_complexity(&[50, 50, 50, 50, 50, 50]), 0);
}

#[test]
fn complexity_clamps_wide_spreads_to_one_hundred() {
    // variance 2222.2, times ten clamps at the ceiling
    assert_eq!(pattern_complexity(&[100, 100, 0, 0, 0, 0]), 100);
}

#[test]
fn complexity_scales_small_spreads() {
    // mean 50, variance 4 -> 40
    assert_eq!(pattern_complexity(&[52, 48]), 40);
}

#[test]
fn complexity_of_degenerate_input_is_zero() {
    assert_eq!(pattern_complexity(&[]), 0);
    assert_eq!(pattern_complexity(&[83]), 0);
}
