//! HTTP tests for the listing endpoint.
//!
//! Covers:
//! 1. Successful generation in both languages
//! 2. Input rejection before any backend call
//! 3. Backend failures mapped to 502 with no partial listing
//! 4. Artifact writing and the health check

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use listing::{
    prompts,
    testing::{MockFailure, MockGenerator},
    PipelineConfig,
};
use listing_server::artifacts::{ArtifactWriter, INPUT_FILE, OUTPUT_FILE};

use crate::common::{lisbon_sale_pt, madrid_rental, TestHarness};

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn english_listing_returns_html() {
    let harness = TestHarness::new(
        MockGenerator::new()
            .with_text("T1 Apartment in Lavapies, Madrid")
            .with_text("Lavapies is lively & multicultural."),
    );

    let response = harness.post_listing(madrid_rental().to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/html")));

    let html = &response.body;
    assert!(html.starts_with("<title>T1 Apartment in Lavapies, Madrid</title>\n"));
    assert!(html.contains("<meta name=\"description\" content=\""));
    assert!(html.contains("<li>35 sqm of living space</li>"));
    assert!(html.contains("<li>1 bedroom and 1 bathroom</li>"));
    assert!(html.contains("<li>Located in Lavapies, Madrid</li>"));
    assert!(html.contains("Lavapies is lively &amp; multicultural."));
    assert!(html.ends_with("discover your new home in Madrid.</p>"));
    assert_eq!(harness.mock.call_count(), 6);
}

#[tokio::test]
async fn portuguese_listing_is_translated() {
    let harness = TestHarness::new(MockGenerator::new());

    let response = harness.post_listing(lisbon_sale_pt().to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<li>[pt] Private balcony</li>"));
    assert!(response.body.contains("<li>[pt] Located in Alfama, Lisbon</li>"));
    assert!(response.body.contains("<p class=\"call-to-action\">[pt] "));
    assert_eq!(
        harness
            .mock
            .calls_with_system(prompts::TRANSLATION_SYSTEM_PROMPT)
            .len(),
        1
    );
}

// ============================================================================
// Input rejection
// ============================================================================

#[tokio::test]
async fn malformed_json_is_unprocessable() {
    let harness = TestHarness::new(MockGenerator::new());

    let response = harness.post_listing("{\"title\": ").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.starts_with("invalid input"));
    assert_eq!(harness.mock.call_count(), 0);
}

#[tokio::test]
async fn missing_field_is_unprocessable() {
    let harness = TestHarness::new(MockGenerator::new());
    let mut body = madrid_rental();
    body.as_object_mut().unwrap().remove("price");

    let response = harness.post_listing(body.to_string()).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("price"));
    assert_eq!(harness.mock.call_count(), 0);
}

#[tokio::test]
async fn unknown_language_is_unprocessable() {
    let harness = TestHarness::new(MockGenerator::new());
    let mut body = madrid_rental();
    body["language"] = "fr".into();

    let response = harness.post_listing(body.to_string()).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(harness.mock.call_count(), 0);
}

#[tokio::test]
async fn blank_title_is_unprocessable() {
    let harness = TestHarness::new(MockGenerator::new());
    let mut body = madrid_rental();
    body["title"] = "   ".into();

    let response = harness.post_listing(body.to_string()).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("title"));
}

// ============================================================================
// Backend failures
// ============================================================================

#[tokio::test]
async fn backend_failure_is_bad_gateway() {
    let harness = TestHarness::new(
        MockGenerator::new().fail_call(2, MockFailure::Api(503, "model overloaded".into())),
    );

    let response = harness.post_listing(madrid_rental().to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert!(response.body.contains("generate_neighborhood_summary"));
    assert!(!response.body.contains("<title>"));
    assert_eq!(harness.mock.call_count(), 3);
}

#[tokio::test]
async fn slow_backend_is_bad_gateway() {
    let harness = TestHarness::with_config(
        MockGenerator::new().with_delay(Duration::from_millis(500)),
        PipelineConfig {
            call_timeout: Duration::from_millis(20),
            max_retries: 0,
        },
    );

    let response = harness.post_listing(madrid_rental().to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert!(response.body.contains("timed out"));
}

// ============================================================================
// Artifacts and health
// ============================================================================

#[tokio::test]
async fn artifacts_are_written_on_success() {
    let dir = std::env::temp_dir().join(format!("listing-endpoint-{}", std::process::id()));
    let harness = TestHarness::with_artifacts(MockGenerator::new(), ArtifactWriter::new(&dir));

    let response = harness.post_listing(madrid_rental().to_string()).await;
    assert_eq!(response.status, StatusCode::OK);

    let html = tokio::fs::read_to_string(dir.join(OUTPUT_FILE)).await.unwrap();
    assert_eq!(html, response.body);
    assert!(dir.join(INPUT_FILE).exists());

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn health_reports_ok() {
    let harness = TestHarness::new(MockGenerator::new());

    let response = harness.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn listing_route_requires_post() {
    let harness = TestHarness::new(MockGenerator::new());

    let response = harness.get("/generate_property_listing").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
