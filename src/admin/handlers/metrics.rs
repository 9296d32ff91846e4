//! Metrics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the admin metrics page.
///
/// Renders `templates/metrics.html` with the current hit count.
#[derive(Template, WebTemplate)]
#[template(path = "metrics.html")]
pub struct MetricsTemplate {
    pub hits: u64,
}

/// Renders the number of file server hits.
///
/// # Endpoint
///
/// `GET /admin/metrics`
///
/// Read-only; repeated calls return the same count until `/app` is hit again.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    MetricsTemplate {
        hits: state.admin_service.hits(),
    }
}
