//! OpenAI-backed implementation of the generation traits.

pub mod openai;

pub use openai::{ModelProfile, ModelProfiles, OpenAIGenerator};
