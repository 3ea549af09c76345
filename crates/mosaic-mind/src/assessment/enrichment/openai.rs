//! OpenAI-backed enrichment adapter.
//!
//! Thin chat-completions client: one attempt per call, no retries. Transport
//! failures (timeouts included) and non-2xx statuses all surface as
//! [`EnrichmentError`] so the pipeline can take its fallback path.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{EnrichmentError, EnrichmentProvider};
use crate::assessment::catalog::PersonalityCategory;
use crate::assessment::domain::{CategoryScore, QuestionResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TRAIT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_INSIGHT_MODEL: &str = "gpt-4";

const TRAIT_SYSTEM_PROMPT: &str = "You are a personality psychology expert. Generate 3-4 key traits and a concise description (1-2 sentences) for a personality category based on the score. Be specific and insightful.";
const INSIGHT_SYSTEM_PROMPT: &str = "You are MosaicMind AI, a personality assessment expert. Provide insightful, nuanced, and personalized analysis of personality assessment results. Focus on strengths, growth opportunities, and practical insights. Be professional yet engaging.";

/// Configuration for the OpenAI enrichment adapter.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub trait_model: String,
    pub insight_model: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            trait_model: DEFAULT_TRAIT_MODEL.to_string(),
            insight_model: DEFAULT_INSIGHT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_trait_model(mut self, model: impl Into<String>) -> Self {
        self.trait_model = model.into();
        self
    }

    pub fn with_insight_model(mut self, model: impl Into<String>) -> Self {
        self.insight_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Chat-completions client implementing the enrichment port.
pub struct OpenAiEnrichment {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiEnrichment {
    pub fn new(config: OpenAiConfig) -> Result<Self, EnrichmentError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| EnrichmentError::Network(err.to_string()))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url)
    }

    fn transport_error(&self, err: reqwest::Error) -> EnrichmentError {
        if err.is_timeout() {
            EnrichmentError::Timeout(self.config.timeout.as_secs())
        } else {
            EnrichmentError::Network(err.to_string())
        }
    }

    /// Issues a single chat completion and returns the first choice's text,
    /// or an empty string when the provider returns no content.
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: String,
        max_tokens: u32,
    ) -> Result<String, EnrichmentError> {
        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.7,
            max_tokens,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|err| self.transport_error(err))?;

        Ok(reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

#[async_trait]
impl EnrichmentProvider for OpenAiEnrichment {
    async fn describe_category(
        &self,
        category: PersonalityCategory,
        score: u8,
        dimensions: &BTreeMap<String, u8>,
    ) -> Result<String, EnrichmentError> {
        self.complete(
            &self.config.trait_model,
            TRAIT_SYSTEM_PROMPT,
            trait_prompt(category, score, dimensions),
            300,
        )
        .await
    }

    async fn summarize_profile(
        &self,
        scores: &[CategoryScore],
        responses: &[QuestionResponse],
    ) -> Result<String, EnrichmentError> {
        self.complete(
            &self.config.insight_model,
            INSIGHT_SYSTEM_PROMPT,
            analysis_prompt(scores, responses),
            1500,
        )
        .await
    }
}

pub(crate) fn trait_prompt(
    category: PersonalityCategory,
    score: u8,
    dimensions: &BTreeMap<String, u8>,
) -> String {
    let dimension_json =
        serde_json::to_string(dimensions).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Generate personality traits and description for:\n\
         - Category: {category}\n\
         - Score: {score}/100\n\
         - Dimension Scores: {dimension_json}\n\
         \n\
         Score ranges:\n\
         - 70-100: High expression of category traits\n\
         - 30-69: Moderate/balanced expression\n\
         - 0-29: Low expression\n\
         \n\
         Provide response in this exact format:\n\
         TRAITS: trait1, trait2, trait3, trait4\n\
         DESCRIPTION: 1-2 sentence description focusing on behavioral patterns and tendencies.\n\
         \n\
         Be specific to the {category} domain and make it psychologically accurate.",
        category = category.label(),
        score = score,
        dimension_json = dimension_json,
    )
}

pub(crate) fn analysis_prompt(scores: &[CategoryScore], responses: &[QuestionResponse]) -> String {
    let score_lines = scores
        .iter()
        .map(|s| format!("- {}: {}/100", s.category.label(), s.score))
        .collect::<Vec<_>>()
        .join("\n");

    let response_lines = responses
        .iter()
        .take(5)
        .map(|r| format!("- Question: {}, Score: {}/7", r.question_id, r.score))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "As a personality assessment expert, analyze this MosaicMind profile:\n\
         \n\
         PERSONALITY SCORES:\n{score_lines}\n\
         \n\
         RESPONSE PATTERNS:\n{response_lines}\n\
         \n\
         Please provide:\n\
         1. OVERALL PATTERN ANALYSIS: Identify the dominant personality pattern and key strengths\n\
         2. DIMENSION INTERPLAY: How different traits might interact and complement each other\n\
         3. PRACTICAL INSIGHTS: Real-world implications for work, relationships, and personal growth\n\
         4. GROWTH OPPORTUNITIES: Areas for development based on the profile\n\
         5. UNIQUE MOSAIC: What makes this personality pattern distinctive\n\
         \n\
         Keep the analysis professional, insightful, and actionable. Focus on the unique \
         combination of scores rather than treating each category in isolation.",
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}
