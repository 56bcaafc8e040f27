//! Minimal OpenAI REST API client
//!
//! A small client for the OpenAI chat completions API with no domain-specific
//! logic. Supports free-text chat completions and schema-constrained
//! structured outputs.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::from_env()?.with_timeout(Duration::from_secs(30));
//!
//! let response = client.chat_completion(
//!     ChatRequest::new("gpt-4o-mini")
//!         .message(Message::system("You write browser tab titles."))
//!         .message(Message::user("Title: T3 apartment in Lisbon")),
//! ).await?;
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Highlights {
//!     phrases: Vec<String>,
//! }
//!
//! // Schema generated automatically from type!
//! let highlights: Highlights = client
//!     .extract::<Highlights>("gpt-4o", system_prompt, user_prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{OpenAIError, Result};
pub use schema::StructuredOutput;
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

/// Pure OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: None,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request (connect + response body) by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Type-safe structured output extraction.
    ///
    /// Generates a JSON schema from `T` using `schemars`, sends it to OpenAI,
    /// and deserializes the response.
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::openai_schema();

        debug!(
            type_name = T::type_name(),
            schema = %serde_json::to_string_pretty(&schema).unwrap_or_default(),
            "Generated OpenAI schema for extraction"
        );

        let request = StructuredRequest::new(model, system_prompt, user_prompt, schema)
            .schema_name(T::type_name());
        let json_str = self.structured_output(request).await?;

        serde_json::from_str(strip_code_blocks(&json_str))
            .map_err(|e| OpenAIError::Parse(format!("Failed to deserialize response: {}", e)))
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get a response.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let chat_response = self.post_chat(&request).await?;
        let content = first_content(chat_response)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        Ok(ChatResponse { content })
    }

    /// Structured output with JSON schema.
    ///
    /// Uses OpenAI's `json_schema` response format; returns the raw JSON text.
    pub async fn structured_output(&self, request: StructuredRequest) -> Result<String> {
        let start = std::time::Instant::now();

        let chat_response = self.post_chat(&request).await?;
        let content = first_content(chat_response)?;

        debug!(
            model = %request.model,
            schema = %request.response_format.json_schema.name,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI structured output"
        );

        Ok(content)
    }

    async fn post_chat<B: Serialize>(&self, body: &B) -> Result<types::ChatResponseRaw> {
        let mut builder = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::api(
                Some(status.as_u16()),
                format!("OpenAI API error ({}): {}", status, error_text),
            ));
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                OpenAIError::Parse(e.to_string())
            }
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> OpenAIError {
        warn!(error = %e, "OpenAI request failed");
        match self.timeout {
            Some(timeout) if e.is_timeout() => OpenAIError::Timeout(timeout),
            _ => OpenAIError::Network(e.to_string()),
        }
    }
}

fn first_content(response: types::ChatResponseRaw) -> Result<String> {
    let message = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message)
        .ok_or_else(|| OpenAIError::api(None, "No response from OpenAI"))?;

    match (message.content, message.refusal) {
        (Some(content), _) => Ok(content),
        (None, Some(refusal)) => Err(OpenAIError::api(
            None,
            format!("Model refused: {}", refusal),
        )),
        (None, None) => Err(OpenAIError::Parse("Response message has no content".into())),
    }
}
