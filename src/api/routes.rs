//! API route configuration.

use crate::api::handlers::{
    create_chirp_handler, create_user_handler, get_chirp_handler, list_chirps_handler,
    login_handler, readiness_handler, validate_chirp_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /healthz`           - Liveness probe
/// - `POST /users`             - Register a user
/// - `POST /login`             - Look up a user by email
/// - `POST /chirps`            - Create a chirp
/// - `GET  /chirps`            - List chirps
/// - `GET  /chirps/{chirpID}`  - Fetch one chirp
/// - `POST /validate_chirp`    - Validate and censor without storing
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(readiness_handler))
        .route("/users", post(create_user_handler))
        .route("/login", post(login_handler))
        .route(
            "/chirps",
            get(list_chirps_handler).post(create_chirp_handler),
        )
        .route("/chirps/{chirp_id}", get(get_chirp_handler))
        .route("/validate_chirp", post(validate_chirp_handler))
}
