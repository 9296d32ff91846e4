//! Keeps file server redirects under the path the server is mounted at.

use axum::{
    extract::{NestedPath, Request},
    http::{HeaderValue, header::LOCATION},
    middleware::Next,
    response::Response,
};

/// Prefixes absolute `Location` headers with the nest path.
///
/// `ServeDir` only sees the URI with the mount prefix stripped, so its
/// redirect for `/app/sub` points at `/sub/`. This rewrites it to
/// `/app/sub/`.
pub async fn layer(nested: NestedPath, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    if !response.status().is_redirection() {
        return response;
    }

    let rewritten = response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .filter(|location| location.starts_with('/'))
        .and_then(|location| {
            HeaderValue::from_str(&format!("{}{location}", nested.as_str())).ok()
        });

    if let Some(location) = rewritten {
        response.headers_mut().insert(LOCATION, location);
    }

    response
}
