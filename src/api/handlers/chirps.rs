//! Handlers for chirp creation and retrieval.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::chirp::{ChirpResponse, CreateChirpRequest};
use crate::domain::validation::decode_json;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a chirp.
///
/// # Endpoint
///
/// `POST /api/chirps`
///
/// # Request Body
///
/// ```json
/// { "body": "Hello, world!", "user_id": "50746277-23c6-4d85-a890-564c0044c2fb" }
/// ```
///
/// # Processing
///
/// 1. Decode the body (`400 Invalid JSON in request body` on failure)
/// 2. Reject bodies over 140 characters (`400 Chirp is too long`)
/// 3. Mask denylisted words
/// 4. Store the censored chirp
///
/// # Errors
///
/// Returns `500` if the chirp cannot be stored, e.g. for an unknown `user_id`.
pub async fn create_chirp_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ChirpResponse>), AppError> {
    let (submission, user_id) = decode_json::<CreateChirpRequest>(&body)?.into_parts();

    let chirp = state.chirp_service.create_chirp(submission, user_id).await?;

    Ok((StatusCode::CREATED, Json(chirp.into())))
}

/// Lists all chirps in creation order.
///
/// # Endpoint
///
/// `GET /api/chirps`
pub async fn list_chirps_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChirpResponse>>, AppError> {
    let chirps = state.chirp_service.list_chirps().await?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// Returns a single chirp.
///
/// # Endpoint
///
/// `GET /api/chirps/{chirpID}`
///
/// # Errors
///
/// - `400 Invalid chirp ID` if the id is not a UUID
/// - `404` if the chirp does not exist
pub async fn get_chirp_handler(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, AppError> {
    let chirp_id =
        Uuid::parse_str(&chirp_id).map_err(|_| AppError::bad_request("Invalid chirp ID"))?;

    let chirp = state.chirp_service.get_chirp(chirp_id).await?;

    Ok(Json(chirp.into()))
}
