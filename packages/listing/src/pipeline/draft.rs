//! Pipeline state snapshots.
//!
//! Each step reads the current [`ListingDraft`] and returns a [`StepOutput`];
//! the orchestrator folds the output into the next snapshot with
//! [`ListingDraft::apply`]. Steps never mutate the draft themselves.

use crate::error::{ListingError, Result};
use crate::types::{ListingOutput, PropertyAdjectives};

/// What a single step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutput {
    Title(String),
    Adjectives(PropertyAdjectives),
    NeighborhoodSummary(String),
    Headline(String),
    FullDescription(String),
    MetaDescription(String),
    KeyFeatures(Vec<String>),
    CallToAction(String),
    /// Replaces every user-facing field at once.
    Translation(ListingOutput),
}

/// Fields accumulated so far in one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: Option<String>,
    pub adjectives: Option<PropertyAdjectives>,
    pub neighborhood_summary: Option<String>,
    pub headline: Option<String>,
    pub full_description: Option<String>,
    pub meta_description: Option<String>,
    pub key_features_list: Option<Vec<String>>,
    pub call_to_action: Option<String>,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next snapshot with `output` merged in.
    pub fn apply(self, output: StepOutput) -> Self {
        match output {
            StepOutput::Title(title) => Self {
                title: Some(title),
                ..self
            },
            StepOutput::Adjectives(adjectives) => Self {
                adjectives: Some(adjectives),
                ..self
            },
            StepOutput::NeighborhoodSummary(summary) => Self {
                neighborhood_summary: Some(summary),
                ..self
            },
            StepOutput::Headline(headline) => Self {
                headline: Some(headline),
                ..self
            },
            StepOutput::FullDescription(description) => Self {
                full_description: Some(description),
                ..self
            },
            StepOutput::MetaDescription(meta) => Self {
                meta_description: Some(meta),
                ..self
            },
            StepOutput::KeyFeatures(features) => Self {
                key_features_list: Some(features),
                ..self
            },
            StepOutput::CallToAction(cta) => Self {
                call_to_action: Some(cta),
                ..self
            },
            StepOutput::Translation(listing) => Self {
                title: Some(listing.title),
                meta_description: Some(listing.meta_description),
                headline: Some(listing.headline),
                full_description: Some(listing.full_description),
                key_features_list: Some(listing.key_features_list),
                neighborhood_summary: Some(listing.neighborhood_summary),
                call_to_action: Some(listing.call_to_action),
                ..self
            },
        }
    }

    pub fn title(&self) -> Result<&str> {
        required(&self.title, "title").map(String::as_str)
    }

    pub fn adjectives(&self) -> Result<&PropertyAdjectives> {
        required(&self.adjectives, "adjectives")
    }

    pub fn neighborhood_summary(&self) -> Result<&str> {
        required(&self.neighborhood_summary, "neighborhood_summary").map(String::as_str)
    }

    /// Copy of the seven user-facing fields. Fails on the first missing one.
    pub fn to_output(&self) -> Result<ListingOutput> {
        self.clone().finish()
    }

    /// Consume the draft into the final listing.
    pub fn finish(self) -> Result<ListingOutput> {
        Ok(ListingOutput {
            title: take(self.title, "title")?,
            meta_description: take(self.meta_description, "meta_description")?,
            headline: take(self.headline, "headline")?,
            full_description: take(self.full_description, "full_description")?,
            key_features_list: take(self.key_features_list, "key_features_list")?,
            neighborhood_summary: take(self.neighborhood_summary, "neighborhood_summary")?,
            call_to_action: take(self.call_to_action, "call_to_action")?,
        })
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or(ListingError::IncompleteListing { field })
}

fn take<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ListingError::IncompleteListing { field })
}
