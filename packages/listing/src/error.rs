//! Typed errors for the listing pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the HTTP layer can
//! map each failure class to a status code.

use std::time::Duration;

use openai_client::OpenAIError;
use thiserror::Error;

/// Errors that abort a listing request.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Malformed or missing input; raised before any generation call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A generation step failed (after any configured retries).
    #[error("step `{step}` failed: {source}")]
    Generation {
        step: &'static str,
        #[source]
        source: GenerationError,
    },

    /// A required output field was never produced. Indicates a skipped step.
    #[error("listing is missing `{field}`")]
    IncompleteListing { field: &'static str },
}

impl ListingError {
    /// Name of the step that failed, for generation failures.
    pub fn failed_step(&self) -> Option<&'static str> {
        match self {
            Self::Generation { step, .. } => Some(step),
            _ => None,
        }
    }
}

/// Errors from a single call to the text-generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The call did not finish within the per-call timeout.
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    /// Transport or API failure from the OpenAI client.
    #[error(transparent)]
    Client(#[from] OpenAIError),

    /// The response did not match the requested schema.
    #[error("response failed schema validation: {0}")]
    InvalidResponse(String),

    /// Backend returned nothing usable.
    #[error("empty response")]
    Empty,
}

impl GenerationError {
    /// Whether a retry of the same call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Empty | Self::InvalidResponse(_) => true,
            Self::Client(e) => e.is_transient(),
        }
    }
}

/// Result type alias for listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_names_step() {
        let err = ListingError::Generation {
            step: "generate_headline",
            source: GenerationError::Timeout(Duration::from_secs(5)),
        };

        assert_eq!(err.failed_step(), Some("generate_headline"));
        assert!(err.to_string().contains("generate_headline"));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_config_errors_are_not_retryable() {
        let err = GenerationError::Client(OpenAIError::Config("no key".into()));
        assert!(!err.is_retryable());
        assert!(GenerationError::Timeout(Duration::from_millis(1)).is_retryable());
    }
}
