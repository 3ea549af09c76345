use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use futures::future;

use super::catalog::{PersonalityCategory, QuestionCatalog};
use super::domain::{
    CategoryDataPoint, CategoryScore, ChartKind, MosaicProfile, QuestionResponse,
    VisualizationMetadata,
};
use super::enrichment::{category_narrative, profile_insights, EnrichmentProvider};
use super::scoring::{aggregate_responses, normalized_score, pattern_complexity};

/// Orchestrates one scoring run: aggregation, normalization, concurrent
/// per-category enrichment, the narrative insight call, and final assembly.
pub struct ProfileService<P> {
    catalog: QuestionCatalog,
    provider: Arc<P>,
}

impl<P: EnrichmentProvider> ProfileService<P> {
    pub fn new(catalog: QuestionCatalog, provider: Arc<P>) -> Self {
        Self { catalog, provider }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Generates the complete profile for one set of responses.
    ///
    /// The per-category enrichment calls run concurrently; the insight call
    /// waits for all of them. The returned profile is fully populated even
    /// when every enrichment call fails.
    pub async fn generate(
        &self,
        responses: &[QuestionResponse],
    ) -> Result<MosaicProfile, ProfileError> {
        for response in responses {
            if !(1..=7).contains(&response.score) {
                return Err(ProfileError::ScoreOutOfRange {
                    question_id: response.question_id.clone(),
                    score: response.score,
                });
            }
        }

        let aggregates = aggregate_responses(&self.catalog, responses);

        let normalized: Vec<(PersonalityCategory, u8, BTreeMap<String, u8>)> = aggregates
            .iter()
            .map(|aggregate| {
                let score = normalized_score(&aggregate.scores);
                let dimensions = aggregate
                    .dimensions
                    .iter()
                    .map(|(dimension, values)| (dimension.clone(), normalized_score(values)))
                    .collect();
                (aggregate.category, score, dimensions)
            })
            .collect();

        let narratives = future::join_all(normalized.iter().map(|(category, score, dimensions)| {
            category_narrative(self.provider.as_ref(), *category, *score, dimensions)
        }))
        .await;

        let scores: Vec<CategoryScore> = normalized
            .into_iter()
            .zip(narratives)
            .map(|((category, score, dimensions), narrative)| CategoryScore {
                category,
                score,
                traits: narrative.traits,
                description: narrative.description,
                dimensions,
            })
            .collect();

        let ai_insights = profile_insights(self.provider.as_ref(), &scores, responses).await;

        Ok(MosaicProfile {
            visualization: visualization_for(&scores),
            scores,
            ai_insights,
            generated_at: Utc::now(),
        })
    }
}

/// Error raised when a scoring run cannot produce a profile. No partial
/// profile is ever returned alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("response for question '{question_id}' has score {score}, expected 1-7")]
    ScoreOutOfRange { question_id: String, score: u8 },
}

fn visualization_for(scores: &[CategoryScore]) -> VisualizationMetadata {
    let data = scores
        .iter()
        .map(|score| CategoryDataPoint {
            category: score.category,
            score: score.score,
            full_mark: 100,
            dimensions: score.dimensions.clone(),
        })
        .collect();

    let score_values: Vec<u8> = scores.iter().map(|s| s.score).collect();

    VisualizationMetadata {
        kind: ChartKind::Radial,
        data,
        complexity: pattern_complexity(&score_values),
    }
}
