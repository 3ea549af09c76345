use std::collections::BTreeMap;

use super::common::*;

use crate::assessment::catalog::PersonalityCategory;
use crate::assessment::enrichment::{
    category_narrative, fallback, openai, parser, profile_insights, ScoreTier,
};

#[test]
fn parser_extracts_both_labeled_fields() {
    let narrative = parser::parse_trait_reply(
        "TRAITS: Curious, Analytical, Warm, Driven\nDESCRIPTION: Leans into open problems with energy.",
    );

    assert_eq!(narrative.traits, vec!["Curious", "Analytical", "Warm", "Driven"]);
    assert_eq!(narrative.description, "Leans into open problems with energy.");
}

#[test]
fn parser_is_case_insensitive_and_tolerates_preamble() {
    let narrative = parser::parse_trait_reply(
        "Sure! Here are the traits: Grounded, Curious\nAnd a description: Keeps a steady outlook.",
    );

    assert_eq!(narrative.traits, vec!["Grounded", "Curious"]);
    assert_eq!(narrative.description, "Keeps a steady outlook.");
}

#[test]
fn parser_substitutes_only_the_missing_field() {
    let missing_description =
        parser::parse_trait_reply("TRAITS: Direct, Pragmatic, Concrete\nNothing else follows.");
    assert_eq!(missing_description.traits, vec!["Direct", "Pragmatic", "Concrete"]);
    assert_eq!(
        missing_description.description,
        "Shows a balanced pattern in this personality dimension."
    );

    let missing_traits = parser::parse_trait_reply("DESCRIPTION: Values quiet focus over noise.");
    assert_eq!(missing_traits.traits, vec!["Analytical", "Adaptable", "Balanced"]);
    assert_eq!(missing_traits.description, "Values quiet focus over noise.");
}

#[test]
fn parser_defaults_everything_on_an_empty_reply() {
    let narrative = parser::parse_trait_reply("");
    assert_eq!(narrative.traits, vec!["Analytical", "Adaptable", "Balanced"]);
    assert!(!narrative.description.is_empty());
}

#[test]
fn parser_drops_blank_trait_entries() {
    let narrative = parser::parse_trait_reply("TRAITS: Bold, , Calm,\nDESCRIPTION: Two traits.");
    assert_eq!(narrative.traits, vec!["Bold", "Calm"]);
}

#[test]
fn score_tiers_split_at_thirty_and_seventy() {
    assert_eq!(ScoreTier::for_score(100), ScoreTier::High);
    assert_eq!(ScoreTier::for_score(70), ScoreTier::High);
    assert_eq!(ScoreTier::for_score(69), ScoreTier::Medium);
    assert_eq!(ScoreTier::for_score(30), ScoreTier::Medium);
    assert_eq!(ScoreTier::for_score(29), ScoreTier::Low);
    assert_eq!(ScoreTier::for_score(0), ScoreTier::Low);
}

#[test]
fn fallback_table_is_complete() {
    let categories = [
        PersonalityCategory::Emotion,
        PersonalityCategory::Intellect,
        PersonalityCategory::Social,
        PersonalityCategory::Drive,
        PersonalityCategory::Openness,
        PersonalityCategory::Resilience,
    ];

    for category in categories {
        for score in [85, 50, 10] {
            let narrative = fallback::narrative_for(category, score);
            assert_eq!(narrative.traits.len(), 4);
            assert!(narrative.traits.iter().all(|t| !t.is_empty()));
            assert!(!narrative.description.is_empty());
        }
    }
}

#[tokio::test]
async fn failed_describe_call_falls_back_to_the_tier_table() {
    let narrative = category_narrative(
        &FailingEnrichment,
        PersonalityCategory::Emotion,
        85,
        &BTreeMap::new(),
    )
    .await;

    assert_eq!(narrative, fallback::narrative_for(PersonalityCategory::Emotion, 85));
    assert!(narrative.traits.contains(&"Empathetic".to_string()));
}

#[tokio::test]
async fn successful_describe_call_is_parsed() {
    let provider = CannedEnrichment::well_formed();
    let narrative = category_narrative(
        &provider,
        PersonalityCategory::Drive,
        55,
        &BTreeMap::new(),
    )
    .await;

    assert_eq!(narrative.traits, vec!["Curious", "Focused", "Warm"]);
    assert_eq!(narrative.description, "Steady and attentive under pressure.");
}

#[tokio::test]
async fn insights_fall_back_on_failure_and_on_empty_replies() {
    let failed = profile_insights(&FailingEnrichment, &[], &[]).await;
    assert_eq!(failed, fallback::INSIGHTS_UNAVAILABLE);

    let empty = CannedEnrichment {
        reply: String::new(),
        insights: "   ".to_string(),
    };
    let blank = profile_insights(&empty, &[], &[]).await;
    assert_eq!(blank, fallback::INSIGHTS_EMPTY);

    let canned = CannedEnrichment::well_formed();
    let real = profile_insights(&canned, &[], &[]).await;
    assert_eq!(real, "A layered profile with complementary strengths.");
}

#[test]
fn trait_prompt_embeds_score_tier_framing() {
    let mut dimensions = BTreeMap::new();
    dimensions.insert("Empathy".to_string(), 72u8);

    let prompt = openai::trait_prompt(PersonalityCategory::Emotion, 55, &dimensions);
    assert!(prompt.contains("Category: Emotion"));
    assert!(prompt.contains("Score: 55/100"));
    assert!(prompt.contains("70-100: High expression"));
    assert!(prompt.contains("30-69: Moderate/balanced expression"));
    assert!(prompt.contains("0-29: Low expression"));
    assert!(prompt.contains("\"Empathy\":72"));
    assert!(prompt.contains("TRAITS:"));
    assert!(prompt.contains("DESCRIPTION:"));
}

#[test]
fn analysis_prompt_lists_scores_and_first_five_responses() {
    let responses = full_responses(4);
    let scores = Vec::new();
    let prompt = openai::analysis_prompt(&scores, &responses);

    assert!(prompt.contains("Question: emotion_1, Score: 4/7"));
    assert!(prompt.contains("Question: intellect_2, Score: 4/7"));
    assert!(!prompt.contains("intellect_3"), "only the first five responses appear");
    assert!(prompt.contains("OVERALL PATTERN ANALYSIS"));
}
