//! Generation backend capabilities.
//!
//! The pipeline only ever needs two things from a language model:
//! - free text for a system + user message pair
//! - a record conforming to a declared JSON schema
//!
//! Keeping them as separate narrow traits lets tests stub the backend with
//! deterministic responses.

use async_trait::async_trait;
use openai_client::StructuredOutput;
use serde_json::Value;

use crate::error::GenerationError;

/// Which model profile a prompt should run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Creative long-form text.
    Standard,
    /// Short, cheap outputs (titles, headlines).
    Light,
    /// Deterministic translation.
    Translation,
}

/// A system + user message pair bound to a model tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    pub system: String,
    pub user: String,
    pub tier: ModelTier,
}

impl GenerationPrompt {
    pub fn new(tier: ModelTier, system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            tier,
        }
    }
}

/// A named JSON schema the response must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSpec {
    pub name: String,
    pub schema: Value,
}

impl SchemaSpec {
    pub fn of<T: StructuredOutput>() -> Self {
        Self {
            name: T::type_name(),
            schema: T::openai_schema(),
        }
    }
}

/// Free-text completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError>;
}

/// Schema-constrained completion. Returns the raw JSON record.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_json(
        &self,
        prompt: &GenerationPrompt,
        schema: &SchemaSpec,
    ) -> Result<Value, GenerationError>;
}

/// Request a typed record and validate the response against `T`.
pub async fn generate_record<T: StructuredOutput>(
    generator: &dyn StructuredGenerator,
    prompt: &GenerationPrompt,
) -> Result<T, GenerationError> {
    let value = generator.generate_json(prompt, &SchemaSpec::of::<T>()).await?;
    serde_json::from_value(value).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
}
