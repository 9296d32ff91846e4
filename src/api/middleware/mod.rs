//! HTTP middleware for request processing.
//!
//! Provides visit counting, file server redirect fixing and observability
//! middleware.

pub mod metrics;
pub mod redirect;
pub mod tracing;
