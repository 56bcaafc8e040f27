use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use listing::{ModelProfile, ModelProfiles, PipelineConfig};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub standard_model: String,
    pub light_model: String,
    pub translation_model: String,
    pub generation_timeout: Duration,
    pub max_retries: u32,
    pub escape_html: bool,
    pub artifact_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ModelProfiles::default();

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            openai_base_url: var("OPENAI_BASE_URL"),
            standard_model: var("LISTING_MODEL").unwrap_or(defaults.standard.model),
            light_model: var("LISTING_LIGHT_MODEL").unwrap_or(defaults.light.model),
            translation_model: var("LISTING_TRANSLATION_MODEL")
                .unwrap_or(defaults.translation.model),
            generation_timeout: Duration::from_secs(
                var("GENERATION_TIMEOUT_SECS")
                    .unwrap_or_else(|| "60".to_string())
                    .parse()
                    .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_retries: var("GENERATION_MAX_RETRIES")
                .unwrap_or_else(|| "0".to_string())
                .parse()
                .context("GENERATION_MAX_RETRIES must be a non-negative number")?,
            escape_html: var("LISTING_ESCAPE_HTML")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("LISTING_ESCAPE_HTML must be true or false")?,
            artifact_dir: var("LISTING_ARTIFACT_DIR").map(PathBuf::from),
        })
    }

    /// Model profiles with configured identifiers and the default temperatures.
    pub fn model_profiles(&self) -> ModelProfiles {
        let defaults = ModelProfiles::default();
        ModelProfiles {
            standard: ModelProfile::new(&self.standard_model, defaults.standard.temperature),
            light: ModelProfile::new(&self.light_model, defaults.light.temperature),
            translation: ModelProfile::new(
                &self.translation_model,
                defaults.translation.temperature,
            ),
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            call_timeout: self.generation_timeout,
            max_retries: self.max_retries,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
