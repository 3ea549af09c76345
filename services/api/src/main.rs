use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use mosaic_mind::assessment::{
    assessment_router, share, EnrichmentProvider, MosaicProfile, OfflineEnrichment, OpenAiConfig,
    OpenAiEnrichment, ProfileService, QuestionCatalog, QuestionResponse,
};
use mosaic_mind::config::{AppConfig, EnrichmentSettings};
use mosaic_mind::error::AppError;
use mosaic_mind::telemetry;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "MosaicMind",
    about = "Run the MosaicMind assessment service and scoring tools from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a saved response file and print the resulting profile
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON file holding an array of {"questionId", "score"} responses
    #[arg(long)]
    responses: PathBuf,
    /// Print the full profile JSON instead of the text report
    #[arg(long)]
    json: bool,
    /// Write the share-card SVG to the given path
    #[arg(long)]
    share_card: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => run_score(args).await,
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_routes(&config.enrichment)?)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the assessment router, choosing the live OpenAI adapter when an
/// API key is configured and the deterministic fallback provider otherwise.
fn assessment_routes(settings: &EnrichmentSettings) -> Result<Router, AppError> {
    match openai_config(settings) {
        Some(config) => {
            let provider = OpenAiEnrichment::new(config)?;
            let service = ProfileService::new(QuestionCatalog::standard(), Arc::new(provider));
            Ok(assessment_router(Arc::new(service)))
        }
        None => {
            warn!("OPENAI_API_KEY not set; profiles use built-in fallback content");
            let service = ProfileService::new(QuestionCatalog::standard(), Arc::new(OfflineEnrichment));
            Ok(assessment_router(Arc::new(service)))
        }
    }
}

fn openai_config(settings: &EnrichmentSettings) -> Option<OpenAiConfig> {
    let key = settings.api_key.as_ref()?;
    let mut config = OpenAiConfig::new(key.clone()).with_timeout(settings.timeout);

    if let Some(base_url) = &settings.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(model) = &settings.trait_model {
        config = config.with_trait_model(model.clone());
    }
    if let Some(model) = &settings.insight_model {
        config = config.with_insight_model(model.clone());
    }

    Some(config)
}

async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let raw = std::fs::read_to_string(&args.responses)?;
    let responses: Vec<QuestionResponse> = serde_json::from_str(&raw)?;

    match openai_config(&config.enrichment) {
        Some(provider_config) => {
            let provider = OpenAiEnrichment::new(provider_config)?;
            score_and_render(provider, responses, args).await
        }
        None => score_and_render(OfflineEnrichment, responses, args).await,
    }
}

async fn score_and_render<P: EnrichmentProvider>(
    provider: P,
    responses: Vec<QuestionResponse>,
    args: ScoreArgs,
) -> Result<(), AppError> {
    let service = ProfileService::new(QuestionCatalog::standard(), Arc::new(provider));
    let profile = service.generate(&responses).await?;

    if let Some(path) = &args.share_card {
        std::fs::write(path, share::share_card_svg(&profile))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", profile_report(&profile));
    }

    Ok(())
}

/// Plain-text rendition of a profile for the terminal.
fn profile_report(profile: &MosaicProfile) -> String {
    let mut report = String::new();

    report.push_str("MosaicMind profile\n");
    report.push_str(&format!("Generated: {}\n", profile.generated_at.to_rfc3339()));

    report.push_str("\nCategory scores\n");
    for score in &profile.scores {
        report.push_str(&format!(
            "- {}: {}/100\n",
            score.category.label(),
            score.score
        ));
        report.push_str(&format!("  traits: {}\n", score.traits.join(", ")));
        report.push_str(&format!("  {}\n", score.description));
        if !score.dimensions.is_empty() {
            let dimensions = score
                .dimensions
                .iter()
                .map(|(dimension, value)| format!("{dimension} {value}"))
                .collect::<Vec<_>>()
                .join(", ");
            report.push_str(&format!("  dimensions: {dimensions}\n"));
        }
    }

    report.push_str(&format!(
        "\nPattern complexity: {}/100\n",
        profile.visualization.complexity
    ));

    report.push_str("\nInsights\n");
    report.push_str(&profile.ai_insights);
    report.push('\n');

    report
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
