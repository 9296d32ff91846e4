//! Application layer services implementing business logic.
//!
//! Services coordinate the validation pipeline, the hit counter and the
//! repository traits, and give HTTP handlers a narrow API.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration and email login
//! - [`services::chirp_service::ChirpService`] - Chirp creation and retrieval
//! - [`services::admin_service::AdminService`] - Visit metrics and gated reset

pub mod services;
