//! Listing generation pipeline.
//!
//! A fixed sequence of eight steps followed by one conditional translation:
//!
//! ```text
//! generate_title -> generate_adjectives -> generate_neighborhood_summary
//!   -> generate_headline -> generate_full_description
//!   -> generate_meta_description -> add_key_features -> add_call_to_action
//!   -> [language != en] translate_to_portuguese
//! ```
//!
//! Steps run strictly one after another. Any unrecovered generation failure
//! aborts the run; no partial listing is ever returned.

pub mod draft;

pub use draft::{ListingDraft, StepOutput};

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::error::{GenerationError, ListingError, Result};
use crate::features::{call_to_action, key_features};
use crate::prompts;
use crate::traits::{
    generate_record, GenerationPrompt, ModelTier, StructuredGenerator, TextGenerator,
};
use crate::types::{ListingOutput, PropertyAdjectives, PropertyInput};

/// One unit of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    GenerateTitle,
    GenerateAdjectives,
    GenerateNeighborhoodSummary,
    GenerateHeadline,
    GenerateFullDescription,
    GenerateMetaDescription,
    AddKeyFeatures,
    AddCallToAction,
    TranslateToPortuguese,
}

impl Step {
    /// Steps that always run, in order.
    pub const SEQUENCE: [Step; 8] = [
        Step::GenerateTitle,
        Step::GenerateAdjectives,
        Step::GenerateNeighborhoodSummary,
        Step::GenerateHeadline,
        Step::GenerateFullDescription,
        Step::GenerateMetaDescription,
        Step::AddKeyFeatures,
        Step::AddCallToAction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GenerateTitle => "generate_title",
            Self::GenerateAdjectives => "generate_adjectives",
            Self::GenerateNeighborhoodSummary => "generate_neighborhood_summary",
            Self::GenerateHeadline => "generate_headline",
            Self::GenerateFullDescription => "generate_full_description",
            Self::GenerateMetaDescription => "generate_meta_description",
            Self::AddKeyFeatures => "add_key_features",
            Self::AddCallToAction => "add_call_to_action",
            Self::TranslateToPortuguese => "translate_to_portuguese",
        }
    }

    /// Whether the step calls the generation backend.
    pub fn is_generative(self) -> bool {
        !matches!(self, Self::AddKeyFeatures | Self::AddCallToAction)
    }
}

/// The single branch point: translate unless English was requested.
pub fn should_translate(input: &PropertyInput) -> bool {
    input.language.needs_translation()
}

/// Per-call limits applied to every generative step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Upper bound for a single backend call. Expiry fails the step.
    pub call_timeout: Duration,
    /// Extra attempts for a failed step. `0` aborts on the first failure.
    pub max_retries: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(60),
            max_retries: 0,
        }
    }
}

/// A finished run: the listing plus the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRun {
    pub run_id: Uuid,
    pub output: ListingOutput,
    pub steps: Vec<Step>,
}

impl ListingRun {
    pub fn translated(&self) -> bool {
        self.steps.contains(&Step::TranslateToPortuguese)
    }
}

/// Orchestrates the listing steps against a generation backend.
#[derive(Clone)]
pub struct ListingPipeline {
    text: Arc<dyn TextGenerator>,
    structured: Arc<dyn StructuredGenerator>,
    config: PipelineConfig,
}

impl ListingPipeline {
    pub fn new(
        text: Arc<dyn TextGenerator>,
        structured: Arc<dyn StructuredGenerator>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            text,
            structured,
            config,
        }
    }

    /// Use one backend for both capabilities.
    pub fn with_backend<G>(backend: Arc<G>, config: PipelineConfig) -> Self
    where
        G: TextGenerator + StructuredGenerator + 'static,
    {
        Self::new(backend.clone(), backend, config)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every step for `input` and assemble the listing.
    pub async fn run(&self, input: &PropertyInput) -> Result<ListingRun> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("listing_pipeline", %run_id);

        async move {
            let start = Instant::now();
            info!(
                language = ?input.language,
                listing_type = %input.listing_type,
                "Starting listing pipeline"
            );

            let mut draft = ListingDraft::new();
            let mut steps = Vec::with_capacity(Step::SEQUENCE.len() + 1);

            let branch = should_translate(input).then_some(Step::TranslateToPortuguese);
            for step in Step::SEQUENCE.into_iter().chain(branch) {
                let output = self.execute_step(step, input, &draft).await.map_err(|e| {
                    error!(step = step.name(), error = %e, "Listing pipeline aborted");
                    e
                })?;
                draft = draft.apply(output);
                steps.push(step);
            }

            let output = draft.finish()?;

            info!(
                steps = steps.len(),
                translated = steps.contains(&Step::TranslateToPortuguese),
                duration_ms = start.elapsed().as_millis(),
                "Listing pipeline finished"
            );

            Ok(ListingRun {
                run_id,
                output,
                steps,
            })
        }
        .instrument(span)
        .await
    }

    /// Run one step against a snapshot. Does not modify the snapshot.
    pub async fn execute_step(
        &self,
        step: Step,
        input: &PropertyInput,
        draft: &ListingDraft,
    ) -> Result<StepOutput> {
        let start = Instant::now();
        debug!(step = step.name(), "Running step");

        let output = match step {
            Step::GenerateTitle => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Light,
                    prompts::TITLE_SYSTEM_PROMPT,
                    prompts::title_prompt(input),
                );
                StepOutput::Title(self.text(step, &prompt).await?)
            }
            Step::GenerateAdjectives => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Standard,
                    prompts::ADJECTIVES_SYSTEM_PROMPT,
                    prompts::features_paragraph(input),
                );
                let adjectives = self
                    .attempt(step, || {
                        generate_record::<PropertyAdjectives>(self.structured.as_ref(), &prompt)
                    })
                    .await?;
                StepOutput::Adjectives(adjectives)
            }
            Step::GenerateNeighborhoodSummary => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Standard,
                    prompts::NEIGHBORHOOD_SYSTEM_PROMPT,
                    prompts::neighborhood_prompt(input),
                );
                StepOutput::NeighborhoodSummary(self.text(step, &prompt).await?)
            }
            Step::GenerateHeadline => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Light,
                    prompts::HEADLINE_SYSTEM_PROMPT,
                    prompts::headline_prompt(draft.title()?, draft.adjectives()?),
                );
                StepOutput::Headline(self.text(step, &prompt).await?)
            }
            Step::GenerateFullDescription => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Standard,
                    prompts::FULL_DESCRIPTION_SYSTEM_PROMPT,
                    prompts::description_prompt(
                        input,
                        draft.adjectives()?,
                        draft.neighborhood_summary()?,
                    ),
                );
                StepOutput::FullDescription(self.text(step, &prompt).await?)
            }
            Step::GenerateMetaDescription => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Standard,
                    prompts::META_DESCRIPTION_SYSTEM_PROMPT,
                    prompts::description_prompt(
                        input,
                        draft.adjectives()?,
                        draft.neighborhood_summary()?,
                    ),
                );
                StepOutput::MetaDescription(self.text(step, &prompt).await?)
            }
            Step::AddKeyFeatures => StepOutput::KeyFeatures(key_features(input)),
            Step::AddCallToAction => StepOutput::CallToAction(call_to_action(input.city())),
            Step::TranslateToPortuguese => {
                let prompt = GenerationPrompt::new(
                    ModelTier::Translation,
                    prompts::TRANSLATION_SYSTEM_PROMPT,
                    draft.to_output()?.to_prompt_text(),
                );
                let translated = self
                    .attempt(step, || {
                        generate_record::<ListingOutput>(self.structured.as_ref(), &prompt)
                    })
                    .await?;
                StepOutput::Translation(translated)
            }
        };

        debug!(
            step = step.name(),
            duration_ms = start.elapsed().as_millis(),
            "Step finished"
        );
        Ok(output)
    }

    async fn text(&self, step: Step, prompt: &GenerationPrompt) -> Result<String> {
        self.attempt(step, || self.text.generate_text(prompt)).await
    }

    /// Call the backend under the per-call timeout, retrying retryable
    /// failures up to `max_retries` times.
    async fn attempt<T, F, Fut>(&self, step: Step, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, GenerationError>>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let outcome = match tokio::time::timeout(self.config.call_timeout, call()).await {
                Ok(result) => result,
                Err(_) => Err(GenerationError::Timeout(self.config.call_timeout)),
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt <= self.config.max_retries => {
                    warn!(
                        step = step.name(),
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "Step failed, retrying"
                    );
                }
                Err(source) => {
                    return Err(ListingError::Generation {
                        step: step.name(),
                        source,
                    })
                }
            }
        }
    }
}
