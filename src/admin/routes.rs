//! Admin route configuration.

use crate::admin::handlers::{metrics_handler, reset_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/admin`.
///
/// # Endpoints
///
/// - `GET  /metrics` - HTML page with the file server hit count
/// - `POST /reset`   - Clear hits and users (only when `PLATFORM=dev`)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/reset", post(reset_handler))
}
