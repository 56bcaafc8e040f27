//! Testing utilities including a mock generation backend.
//!
//! [`MockGenerator`] implements both generation traits with deterministic
//! responses, records every call, and can inject failures or delays so the
//! pipeline can be exercised without network access.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use openai_client::OpenAIError;
use serde_json::{json, Value};

use crate::error::GenerationError;
use crate::traits::{GenerationPrompt, ModelTier, SchemaSpec, StructuredGenerator, TextGenerator};

/// Record of a call made to the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Text {
        tier: ModelTier,
        system: String,
        user: String,
    },
    Structured {
        tier: ModelTier,
        schema: String,
        system: String,
        user: String,
    },
}

impl MockCall {
    pub fn system(&self) -> &str {
        match self {
            Self::Text { system, .. } | Self::Structured { system, .. } => system,
        }
    }

    pub fn user(&self) -> &str {
        match self {
            Self::Text { user, .. } | Self::Structured { user, .. } => user,
        }
    }

    pub fn schema(&self) -> Option<&str> {
        match self {
            Self::Structured { schema, .. } => Some(schema),
            Self::Text { .. } => None,
        }
    }
}

/// Failure to inject for a given call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    Timeout,
    Network,
    /// Non-2xx response with the given HTTP status.
    Api(u16, String),
    /// Structured call returns JSON that does not match the schema.
    MalformedRecord,
}

/// A deterministic stand-in for the OpenAI backend.
///
/// Without configuration, text calls answer `"Generated: <first user line>"`,
/// adjective requests get two phrases per category, and translation requests
/// echo each field prefixed with `[pt] `.
#[derive(Clone, Default)]
pub struct MockGenerator {
    text_responses: Arc<RwLock<VecDeque<String>>>,
    json_responses: Arc<RwLock<VecDeque<Value>>>,
    failures: Arc<RwLock<HashMap<usize, MockFailure>>>,
    delay: Option<Duration>,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text response (served before defaults, FIFO).
    pub fn with_text(self, response: impl Into<String>) -> Self {
        self.text_responses.write().unwrap().push_back(response.into());
        self
    }

    /// Queue a structured response (served before defaults, FIFO).
    pub fn with_json(self, response: Value) -> Self {
        self.json_responses.write().unwrap().push_back(response);
        self
    }

    /// Fail the `index`-th call (0-based, text and structured calls share the count).
    pub fn fail_call(self, index: usize, failure: MockFailure) -> Self {
        self.failures.write().unwrap().insert(index, failure);
        self
    }

    /// Sleep before every response.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Calls whose system prompt equals `system`.
    pub fn calls_with_system(&self, system: &str) -> Vec<MockCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.system() == system)
            .collect()
    }

    /// Record the call and return its index.
    fn record(&self, call: MockCall) -> usize {
        let mut calls = self.calls.write().unwrap();
        calls.push(call);
        calls.len() - 1
    }

    async fn before_response(&self, index: usize) -> Result<Option<MockFailure>, GenerationError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.failures.read().unwrap().get(&index).cloned();
        match failure {
            Some(MockFailure::Timeout) => Err(GenerationError::Timeout(Duration::from_secs(0))),
            Some(MockFailure::Network) => Err(GenerationError::Client(OpenAIError::Network(
                "connection reset".into(),
            ))),
            Some(MockFailure::Api(status, msg)) => Err(GenerationError::Client(OpenAIError::api(
                Some(status),
                msg,
            ))),
            other => Ok(other),
        }
    }

    fn default_json(schema: &SchemaSpec, prompt: &GenerationPrompt) -> Value {
        if schema.name == "ListingOutput" {
            return mock_translation(&prompt.user);
        }
        json!({
            "area_size": ["cozy", "bright"],
            "year_built": ["modern", "well kept"],
            "ideal_occupants": ["perfect for couples", "great for professionals"],
            "amenities": ["convenient elevator access", "sunny balcony"],
        })
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_text(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError> {
        let index = self.record(MockCall::Text {
            tier: prompt.tier,
            system: prompt.system.clone(),
            user: prompt.user.clone(),
        });

        if self.before_response(index).await?.is_some() {
            return Err(GenerationError::Empty);
        }

        let scripted = self.text_responses.write().unwrap().pop_front();
        Ok(scripted.unwrap_or_else(|| {
            format!(
                "Generated: {}",
                prompt.user.lines().next().unwrap_or_default()
            )
        }))
    }
}

#[async_trait]
impl StructuredGenerator for MockGenerator {
    async fn generate_json(
        &self,
        prompt: &GenerationPrompt,
        schema: &SchemaSpec,
    ) -> Result<Value, GenerationError> {
        let index = self.record(MockCall::Structured {
            tier: prompt.tier,
            schema: schema.name.clone(),
            system: prompt.system.clone(),
            user: prompt.user.clone(),
        });

        if let Some(MockFailure::MalformedRecord) = self.before_response(index).await? {
            return Ok(json!({ "unexpected": true }));
        }

        let scripted = self.json_responses.write().unwrap().pop_front();
        Ok(scripted.unwrap_or_else(|| Self::default_json(schema, prompt)))
    }
}

/// Parse `**field**: value` blocks and prefix every value with `[pt] `.
fn mock_translation(prompt: &str) -> Value {
    let mut fields = serde_json::Map::new();

    for block in prompt.split("\n\n") {
        let Some(rest) = block.trim().strip_prefix("**") else {
            continue;
        };
        let Some((name, value)) = rest.split_once("**: ") else {
            continue;
        };

        let translated = if name == "key_features_list" {
            let items: Vec<String> = serde_json::from_str(value).unwrap_or_default();
            json!(items.iter().map(|i| format!("[pt] {i}")).collect::<Vec<_>>())
        } else {
            json!(format!("[pt] {value}"))
        };
        fields.insert(name.to_string(), translated);
    }

    Value::Object(fields)
}
