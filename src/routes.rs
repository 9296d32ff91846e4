//! Top-level router configuration combining API, admin and static routes.
//!
//! # Route Structure
//!
//! - `/api/*`     - JSON API and liveness probe
//! - `/admin/*`   - Metrics page and gated reset
//! - `/app/*`     - Static files from `STATIC_DIR`, counted by the hit counter
//! - `/assets/*`  - Static files from `ASSETS_DIR`, not counted
//!
//! # Middleware
//!
//! - **Visit counting** - `/app` only, see [`crate::api::middleware::metrics`]
//! - **Redirect prefixing** - `/app` and `/assets` directory redirects
//! - **Tracing** - Structured request/response logging on every route
//! - **Path normalization** - Trailing slash trimmed on `/api` and `/admin`
//!
//! The file servers keep the request path as sent, so `/app/sub/` reaches
//! `ServeDir` with its slash and serves `sub/index.html`. Their directory
//! redirects are rewritten by [`crate::api::middleware::redirect`].

use crate::admin;
use crate::api;
use crate::api::middleware::{metrics, redirect, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

/// Filesystem roots served by the router.
#[derive(Debug, Clone)]
pub struct StaticDirs {
    /// Served under `/app`.
    pub app: String,
    /// Served under `/assets`.
    pub assets: String,
}

/// Constructs the application router with all routes and middleware.
///
/// The hit counter in `state` is the one incremented by `/app` requests and
/// reported by `/admin/metrics`.
pub fn app_router(state: AppState, dirs: &StaticDirs) -> Router {
    let file_server = middleware::from_fn_with_state(state.hits.clone(), metrics::layer)
        .layer(middleware::from_fn(redirect::layer).layer(ServeDir::new(&dirs.app)));
    let assets = middleware::from_fn(redirect::layer).layer(ServeDir::new(&dirs.assets));

    let handlers = Router::new()
        .nest("/api", api::routes::api_routes())
        .nest("/admin", admin::routes::admin_routes())
        .with_state(state);

    Router::new()
        .nest_service("/app", file_server)
        .nest_service("/assets", assets)
        .fallback_service(NormalizePathLayer::trim_trailing_slash().layer(handlers))
        .layer(tracing::layer())
}
