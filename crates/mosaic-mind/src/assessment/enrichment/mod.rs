//! Optional AI enrichment of numeric scores into prose.
//!
//! The pipeline talks to a text-generation capability through the
//! [`EnrichmentProvider`] port. Every operation degrades locally: a failed or
//! unparseable reply is replaced with deterministic fallback content, never
//! propagated to the caller.

pub(crate) mod fallback;
pub(crate) mod openai;
pub(crate) mod parser;

pub use fallback::ScoreTier;
pub use openai::{OpenAiConfig, OpenAiEnrichment};

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::warn;

use super::catalog::PersonalityCategory;
use super::domain::{CategoryScore, QuestionResponse};

/// Traits and description attached to a single category score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNarrative {
    pub traits: Vec<String>,
    pub description: String,
}

/// Error raised by an enrichment provider call.
///
/// A transport timeout is treated identically to any other failure; callers
/// take the fallback path in every case.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("enrichment request failed: {0}")]
    Network(String),
    #[error("enrichment request timed out after {0}s")]
    Timeout(u64),
    #[error("enrichment service replied with status {0}")]
    Status(u16),
    #[error("enrichment disabled: no API key configured")]
    Disabled,
}

/// Outbound text-generation capability.
///
/// Implementations perform a single attempt per call, hold no mutable state,
/// and must be safe to invoke concurrently for multiple categories.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Request 3-4 trait labels and a one-to-two sentence description for one
    /// category, framed by the fixed scoring tiers.
    async fn describe_category(
        &self,
        category: PersonalityCategory,
        score: u8,
        dimensions: &BTreeMap<String, u8>,
    ) -> Result<String, EnrichmentError>;

    /// Request a narrative reading across all category scores and the raw
    /// responses.
    async fn summarize_profile(
        &self,
        scores: &[CategoryScore],
        responses: &[QuestionResponse],
    ) -> Result<String, EnrichmentError>;
}

/// Provider used when no API key is configured; every call takes the
/// deterministic fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineEnrichment;

#[async_trait]
impl EnrichmentProvider for OfflineEnrichment {
    async fn describe_category(
        &self,
        _category: PersonalityCategory,
        _score: u8,
        _dimensions: &BTreeMap<String, u8>,
    ) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Disabled)
    }

    async fn summarize_profile(
        &self,
        _scores: &[CategoryScore],
        _responses: &[QuestionResponse],
    ) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Disabled)
    }
}

/// Resolves the traits and description for one category, falling back to the
/// built-in tier table when the provider fails.
///
/// A reply that parses but is missing a labeled field keeps whichever field
/// did parse and substitutes the generic default for the other.
pub(crate) async fn category_narrative<P: EnrichmentProvider + ?Sized>(
    provider: &P,
    category: PersonalityCategory,
    score: u8,
    dimensions: &BTreeMap<String, u8>,
) -> CategoryNarrative {
    match provider.describe_category(category, score, dimensions).await {
        Ok(reply) => parser::parse_trait_reply(&reply),
        Err(error) => {
            warn!(category = category.label(), %error, "category enrichment failed, using fallback");
            fallback::narrative_for(category, score)
        }
    }
}

/// Resolves the narrative insight block for the whole profile.
pub(crate) async fn profile_insights<P: EnrichmentProvider + ?Sized>(
    provider: &P,
    scores: &[CategoryScore],
    responses: &[QuestionResponse],
) -> String {
    match provider.summarize_profile(scores, responses).await {
        Ok(reply) if !reply.trim().is_empty() => reply,
        Ok(_) => fallback::INSIGHTS_EMPTY.to_string(),
        Err(error) => {
            warn!(%error, "profile insight enrichment failed, using fallback");
            fallback::INSIGHTS_UNAVAILABLE.to_string()
        }
    }
}
