use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::PersonalityCategory;

/// One answered question as submitted by the intake collaborator.
///
/// Raw scores live on the 1-7 Likert scale; reverse scoring is applied later
/// during aggregation, never at intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: String,
    pub score: u8,
}

/// Scored summary of one category after normalization and enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: PersonalityCategory,
    pub score: u8,
    pub traits: Vec<String>,
    pub description: String,
    pub dimensions: BTreeMap<String, u8>,
}

/// Chart family rendered by presentation collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Grid,
    Radial,
    Shape,
}

/// One plotted point of the radial chart, with its dimension breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDataPoint {
    pub category: PersonalityCategory,
    pub score: u8,
    pub full_mark: u8,
    pub dimensions: BTreeMap<String, u8>,
}

/// Chart metadata bundled with every profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationMetadata {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Vec<CategoryDataPoint>,
    pub complexity: u8,
}

/// The complete, immutable output of one scoring run.
///
/// Category order equals first-appearance order in the question catalog. The
/// serialized form is the durable export contract: regenerating from the same
/// responses yields an identical document apart from `generatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicProfile {
    pub scores: Vec<CategoryScore>,
    pub visualization: VisualizationMetadata,
    pub ai_insights: String,
    pub generated_at: DateTime<Utc>,
}
