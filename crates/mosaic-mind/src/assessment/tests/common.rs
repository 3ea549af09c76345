use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::{PersonalityCategory, QuestionCatalog};
use crate::assessment::domain::{CategoryScore, QuestionResponse};
use crate::assessment::enrichment::{EnrichmentError, EnrichmentProvider};
use crate::assessment::profile::ProfileService;

/// Provider returning the same scripted reply for every category.
pub(super) struct CannedEnrichment {
    pub reply: String,
    pub insights: String,
}

impl CannedEnrichment {
    pub(super) fn well_formed() -> Self {
        Self {
            reply: "TRAITS: Curious, Focused, Warm\nDESCRIPTION: Steady and attentive under pressure."
                .to_string(),
            insights: "A layered profile with complementary strengths.".to_string(),
        }
    }
}

#[async_trait]
impl EnrichmentProvider for CannedEnrichment {
    async fn describe_category(
        &self,
        _category: PersonalityCategory,
        _score: u8,
        _dimensions: &BTreeMap<String, u8>,
    ) -> Result<String, EnrichmentError> {
        Ok(self.reply.clone())
    }

    async fn summarize_profile(
        &self,
        _scores: &[CategoryScore],
        _responses: &[QuestionResponse],
    ) -> Result<String, EnrichmentError> {
        Ok(self.insights.clone())
    }
}

/// Provider whose every call fails, forcing the fallback tables.
pub(super) struct FailingEnrichment;

#[async_trait]
impl EnrichmentProvider for FailingEnrichment {
    async fn describe_category(
        &self,
        _category: PersonalityCategory,
        _score: u8,
        _dimensions: &BTreeMap<String, u8>,
    ) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Network("connection refused".to_string()))
    }

    async fn summarize_profile(
        &self,
        _scores: &[CategoryScore],
        _responses: &[QuestionResponse],
    ) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Timeout(30))
    }
}

pub(super) fn service_with<P: EnrichmentProvider>(provider: P) -> ProfileService<P> {
    ProfileService::new(QuestionCatalog::standard(), Arc::new(provider))
}

/// Every standard question answered with the same raw score.
pub(super) fn full_responses(raw: u8) -> Vec<QuestionResponse> {
    QuestionCatalog::standard()
        .questions()
        .iter()
        .map(|question| QuestionResponse {
            question_id: question.id.to_string(),
            score: raw,
        })
        .collect()
}

pub(super) fn response(question_id: &str, score: u8) -> QuestionResponse {
    QuestionResponse {
        question_id: question_id.to_string(),
        score,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
