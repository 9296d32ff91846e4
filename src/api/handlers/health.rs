//! Handler for the liveness probe.

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /api/healthz`
///
/// # Response
///
/// Always `200 OK` with `text/plain; charset=utf-8` body `OK`. Does not touch
/// the database.
pub async fn readiness_handler() -> &'static str {
    "OK"
}
