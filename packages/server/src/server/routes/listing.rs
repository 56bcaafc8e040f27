use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use listing::{ListingError, PropertyInput};
use tracing::{error, info, warn};

use crate::server::app::AppState;

/// Error response for the listing endpoint. Bodies are plain text.
#[derive(Debug)]
pub struct ApiError(pub ListingError);

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ListingError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ListingError::Generation { .. } => StatusCode::BAD_GATEWAY,
            ListingError::IncompleteListing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Listing request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Rejected listing request");
        }
        (status, self.0.to_string()).into_response()
    }
}

/// Generate a property listing
///
/// Takes the raw body so malformed JSON surfaces as a 422 with the parser's
/// message rather than axum's default rejection.
pub async fn generate_listing_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, ApiError> {
    let input = PropertyInput::from_slice(&body)?;
    info!(
        city = input.city(),
        language = ?input.language,
        "Generating property listing"
    );

    let run = state.pipeline.run(&input).await?;
    let html = state.renderer.render(&run.output);

    if let Some(artifacts) = &state.artifacts {
        artifacts.write(&input, &html).await;
    }

    info!(run_id = %run.run_id, translated = run.translated(), "Property listing generated");
    Ok(Html(html))
}
