//! Visit counting middleware for the static file server.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::domain::hit_counter::HitCounter;

/// Counts one hit, then forwards the request unchanged.
///
/// The hit is recorded before the inner service runs, so it counts whether
/// or not the file exists.
///
/// # Example
///
/// ```rust,ignore
/// use axum::middleware;
/// use tower::Layer;
/// use tower_http::services::ServeDir;
///
/// let files = middleware::from_fn_with_state(hits, metrics::layer).layer(ServeDir::new("."));
/// let app = Router::new().nest_service("/app", files);
/// ```
pub async fn layer(State(hits): State<Arc<HitCounter>>, req: Request, next: Next) -> Response {
    hits.increment();
    next.run(req).await
}
