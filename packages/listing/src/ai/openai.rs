//! OpenAI implementation of [`TextGenerator`] and [`StructuredGenerator`].
//!
//! # Example
//!
//! ```rust,ignore
//! use listing::ai::{ModelProfiles, OpenAIGenerator};
//! use openai_client::OpenAIClient;
//!
//! let client = OpenAIClient::from_env()?.with_timeout(Duration::from_secs(60));
//! let generator = OpenAIGenerator::new(client, ModelProfiles::default());
//! ```

use async_trait::async_trait;
use openai_client::{strip_code_blocks, ChatRequest, Message, OpenAIClient, StructuredRequest};
use serde_json::Value;
use tracing::debug;

use crate::error::GenerationError;
use crate::traits::{GenerationPrompt, ModelTier, SchemaSpec, StructuredGenerator, TextGenerator};

/// Model identifier and sampling temperature for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProfile {
    pub model: String,
    pub temperature: f32,
}

impl ModelProfile {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

/// One profile per [`ModelTier`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProfiles {
    pub standard: ModelProfile,
    pub light: ModelProfile,
    pub translation: ModelProfile,
}

impl Default for ModelProfiles {
    fn default() -> Self {
        Self {
            standard: ModelProfile::new("gpt-4o", 0.6),
            light: ModelProfile::new("gpt-4o-mini", 0.3),
            translation: ModelProfile::new("gpt-4o", 0.0),
        }
    }
}

impl ModelProfiles {
    pub fn for_tier(&self, tier: ModelTier) -> &ModelProfile {
        match tier {
            ModelTier::Standard => &self.standard,
            ModelTier::Light => &self.light,
            ModelTier::Translation => &self.translation,
        }
    }
}

/// Generation backend over the OpenAI chat completions API.
#[derive(Clone)]
pub struct OpenAIGenerator {
    client: OpenAIClient,
    profiles: ModelProfiles,
}

impl OpenAIGenerator {
    pub fn new(client: OpenAIClient, profiles: ModelProfiles) -> Self {
        Self { client, profiles }
    }

    pub fn profiles(&self) -> &ModelProfiles {
        &self.profiles
    }
}

#[async_trait]
impl TextGenerator for OpenAIGenerator {
    async fn generate_text(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError> {
        let profile = self.profiles.for_tier(prompt.tier);

        debug!(
            model = %profile.model,
            system_len = prompt.system.len(),
            user_len = prompt.user.len(),
            "Requesting text completion"
        );

        let request = ChatRequest::new(&profile.model)
            .message(Message::system(&prompt.system))
            .message(Message::user(&prompt.user))
            .temperature(profile.temperature);

        let response = self.client.chat_completion(request).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl StructuredGenerator for OpenAIGenerator {
    async fn generate_json(
        &self,
        prompt: &GenerationPrompt,
        schema: &SchemaSpec,
    ) -> Result<Value, GenerationError> {
        let profile = self.profiles.for_tier(prompt.tier);

        debug!(
            model = %profile.model,
            schema = %schema.name,
            user_len = prompt.user.len(),
            "Requesting structured completion"
        );

        let request = StructuredRequest::new(
            &profile.model,
            &prompt.system,
            &prompt.user,
            schema.schema.clone(),
        )
        .temperature(profile.temperature)
        .schema_name(&schema.name);

        let raw = self.client.structured_output(request).await?;
        serde_json::from_str(strip_code_blocks(&raw))
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}
