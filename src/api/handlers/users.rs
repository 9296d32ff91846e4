//! Handler for user registration.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::api::dto::user::{EmailRequest, UserResponse};
use crate::domain::validation::decode_json;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": "50746277-23c6-4d85-a890-564c0044c2fb",
///   "created_at": "2021-07-07T00:00:00Z",
///   "updated_at": "2021-07-07T00:00:00Z",
///   "email": "user@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `400` if the body is not valid JSON
/// - `500` if the user cannot be stored
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let EmailRequest { email } = decode_json(&body)?;

    let user = state.user_service.create_user(&email).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
