//! Operator pages under `/admin`.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Metrics page and reset endpoint
//! - [`routes`] - Admin route configuration

pub mod handlers;
pub mod routes;
