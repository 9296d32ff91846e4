//! Handler for login.

use axum::{Json, body::Bytes, extract::State};

use crate::api::dto::user::{EmailRequest, UserResponse};
use crate::domain::validation::decode_json;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves an email to its user account.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Errors
///
/// - `400` if the body is not valid JSON
/// - `401` if no user has this email
/// - `500` on database errors
pub async fn login_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UserResponse>, AppError> {
    let EmailRequest { email } = decode_json(&body)?;

    let user = state.user_service.login(&email).await?;

    Ok(Json(user.into()))
}
