//! Handler for dry-run chirp validation.

use axum::{Json, body::Bytes};

use crate::api::dto::chirp::CleanedChirpResponse;
use crate::domain::validation;
use crate::error::AppError;

/// Runs the validation pipeline without storing anything.
///
/// # Endpoint
///
/// `POST /api/validate_chirp`
///
/// # Response
///
/// ```json
/// { "cleaned_body": "I hear Mastodon is better than ****" }
/// ```
///
/// # Errors
///
/// `400` with `Invalid JSON in request body` or `Chirp is too long`.
pub async fn validate_chirp_handler(body: Bytes) -> Result<Json<CleanedChirpResponse>, AppError> {
    let accepted = validation::validate(&body)?;

    Ok(Json(CleanedChirpResponse {
        cleaned_body: accepted.body,
    }))
}
