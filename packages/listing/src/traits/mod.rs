//! Capability traits for the generation backend.

pub mod generator;

pub use generator::{
    generate_record, GenerationPrompt, ModelTier, SchemaSpec, StructuredGenerator, TextGenerator,
};
