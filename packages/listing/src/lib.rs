//! Real Estate Listing Generation
//!
//! Turns a structured property submission into marketing copy (tab title,
//! headline, description, meta description, neighborhood summary, key
//! features, call to action), optionally translated to Portuguese, and
//! renders it as an HTML fragment.
//!
//! # Usage
//!
//! ```rust,ignore
//! use listing::{HtmlRenderer, ListingPipeline, PipelineConfig, PropertyInput};
//! use listing::testing::MockGenerator;
//!
//! let input = PropertyInput::from_json(body)?;
//! let pipeline = ListingPipeline::with_backend(Arc::new(MockGenerator::new()), PipelineConfig::default());
//! let run = pipeline.run(&input).await?;
//! let html = HtmlRenderer::default().render(&run.output);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Input, generated phrases and output records
//! - [`prompts`] - System prompts and user prompt builders
//! - [`features`] - Deterministic key features and call to action
//! - [`traits`] - Generation backend capabilities
//! - [`ai`] - OpenAI implementation of the backend
//! - [`pipeline`] - Step orchestration
//! - [`render`] - HTML output
//! - [`testing`] - Mock backend for tests

pub mod ai;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod testing;
pub mod traits;
pub mod types;

pub use ai::{ModelProfile, ModelProfiles, OpenAIGenerator};
pub use error::{GenerationError, ListingError, Result};
pub use pipeline::{should_translate, ListingPipeline, ListingRun, PipelineConfig, Step};
pub use render::HtmlRenderer;
pub use traits::{GenerationPrompt, ModelTier, StructuredGenerator, TextGenerator};
pub use types::{
    Language, ListingOutput, ListingType, LocationDetails, PropertyAdjectives, PropertyFeatures,
    PropertyInput,
};
