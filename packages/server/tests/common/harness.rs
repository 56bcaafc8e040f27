//! Test harness driving the router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot` against a router backed
//! by a [`MockGenerator`], so no network or API key is needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use listing::{testing::MockGenerator, HtmlRenderer, ListingPipeline, PipelineConfig};
use listing_server::{
    artifacts::ArtifactWriter,
    server::{build_app, AppState},
};
use tower::ServiceExt;

/// Status, content type and body of a completed request.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct TestHarness {
    pub mock: MockGenerator,
    app: Router,
}

impl TestHarness {
    pub fn new(mock: MockGenerator) -> Self {
        Self::with_config(mock, PipelineConfig::default())
    }

    pub fn with_config(mock: MockGenerator, config: PipelineConfig) -> Self {
        let state = Self::state(&mock, config);
        Self::with_state(mock, state)
    }

    pub fn with_artifacts(mock: MockGenerator, writer: ArtifactWriter) -> Self {
        let state = Self::state(&mock, PipelineConfig::default()).with_artifacts(writer);
        Self::with_state(mock, state)
    }

    fn state(mock: &MockGenerator, config: PipelineConfig) -> AppState {
        let pipeline = ListingPipeline::with_backend(Arc::new(mock.clone()), config);
        AppState::new(pipeline, HtmlRenderer::default())
    }

    fn with_state(mock: MockGenerator, state: AppState) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            mock,
            app: build_app(state),
        }
    }

    pub async fn post_listing(&self, body: impl Into<Body>) -> TestResponse {
        let request = Request::post("/generate_property_listing")
            .header(CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
