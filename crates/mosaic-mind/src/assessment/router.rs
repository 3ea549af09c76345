use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{MosaicProfile, QuestionResponse};
use super::enrichment::EnrichmentProvider;
use super::profile::{ProfileError, ProfileService};
use super::share;

/// Router builder exposing the assessment over HTTP.
pub fn assessment_router<P>(service: Arc<ProfileService<P>>) -> Router
where
    P: EnrichmentProvider + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<P>))
        .route("/api/v1/assessment/profile", post(profile_handler::<P>))
        .route("/api/v1/assessment/share-card", post(share_card_handler))
        .route("/api/v1/assessment/share-links", post(share_links_handler))
        .with_state(service)
}

/// Intake payload: ordered responses from the quiz collaborator.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub responses: Vec<QuestionResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ShareLinksRequest {
    pub profile: MosaicProfile,
    pub url: String,
}

pub(crate) async fn questions_handler<P>(
    State(service): State<Arc<ProfileService<P>>>,
) -> Response
where
    P: EnrichmentProvider + 'static,
{
    (
        StatusCode::OK,
        axum::Json(service.catalog().questions().to_vec()),
    )
        .into_response()
}

pub(crate) async fn profile_handler<P>(
    State(service): State<Arc<ProfileService<P>>>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response
where
    P: EnrichmentProvider + 'static,
{
    match service.generate(&request.responses).await {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error @ ProfileError::ScoreOutOfRange { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn share_card_handler(
    axum::Json(profile): axum::Json<MosaicProfile>,
) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        share::share_card_svg(&profile),
    )
        .into_response()
}

pub(crate) async fn share_links_handler(
    axum::Json(request): axum::Json<ShareLinksRequest>,
) -> Response {
    let payload = json!({
        "twitter": share::twitter_share_url(&request.profile, &request.url),
        "linkedin": share::linkedin_share_url(&request.profile, &request.url),
        "summary": share::share_summary(&request.profile),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
