//! Reset endpoint handler.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Clears the hit counter and deletes every user and chirp.
///
/// # Endpoint
///
/// `POST /admin/reset`
///
/// # Response
///
/// `200 OK` with a plain text confirmation.
///
/// # Errors
///
/// - `403` unless the server was started with `PLATFORM=dev`
/// - `500` if deleting users fails; the counter has already been reset
pub async fn reset_handler(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.admin_service.reset().await?;

    Ok("Hits reset to 0 and database reset to initial state.")
}
