//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use listing::{HtmlRenderer, ListingPipeline, ModelProfiles, OpenAIGenerator};
use openai_client::OpenAIClient;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::artifacts::ArtifactWriter;
use crate::config::Config;
use crate::server::routes::{generate_listing_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ListingPipeline>,
    pub renderer: HtmlRenderer,
    pub artifacts: Option<ArtifactWriter>,
    /// Upper bound for a whole request, on top of the per-call timeouts.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(pipeline: ListingPipeline, renderer: HtmlRenderer) -> Self {
        let request_timeout = request_budget(&pipeline);
        Self {
            pipeline: Arc::new(pipeline),
            renderer,
            artifacts: None,
            request_timeout,
        }
    }

    pub fn with_artifacts(mut self, writer: ArtifactWriter) -> Self {
        self.artifacts = Some(writer);
        self
    }

    /// Wire the OpenAI-backed pipeline from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut client = OpenAIClient::new(config.openai_api_key.clone())
            .with_timeout(config.generation_timeout);
        if let Some(base_url) = &config.openai_base_url {
            client = client.with_base_url(base_url.clone());
        }

        let profiles: ModelProfiles = config.model_profiles();
        tracing::info!(
            standard = %profiles.standard.model,
            light = %profiles.light.model,
            translation = %profiles.translation.model,
            "Model profiles configured"
        );

        let generator = OpenAIGenerator::new(client, profiles);
        let pipeline = ListingPipeline::with_backend(Arc::new(generator), config.pipeline_config());

        let mut state = Self::new(pipeline, HtmlRenderer::new(config.escape_html));
        if let Some(dir) = &config.artifact_dir {
            tracing::info!(dir = %dir.display(), "Writing listing artifacts");
            state = state.with_artifacts(ArtifactWriter::new(dir));
        }
        Ok(state)
    }
}

/// Worst case for one request: every call of the longest branch exhausting
/// its retries, plus a small margin. Saturates at `Duration::MAX`.
fn request_budget(pipeline: &ListingPipeline) -> Duration {
    let config = pipeline.config();
    let calls = 7u32.saturating_mul(config.max_retries.saturating_add(1));
    config
        .call_timeout
        .checked_mul(calls)
        .and_then(|d| d.checked_add(Duration::from_secs(5)))
        .unwrap_or(Duration::MAX)
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let timeout = state.request_timeout;

    Router::new()
        .route("/generate_property_listing", post(generate_listing_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
