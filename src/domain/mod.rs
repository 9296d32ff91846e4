//! Domain layer: entities, repository contracts and the request-independent
//! rules of the service.
//!
//! # Modules
//!
//! - [`entities`] - Users and chirps
//! - [`repositories`] - Data access trait definitions
//! - [`hit_counter`] - Shared visit counter for the static file server
//! - [`moderation`] - Denylist filter for chirp bodies
//! - [`validation`] - Decode / length / moderation pipeline for chirps
//! - [`operating_mode`] - Startup mode and the admin reset gate
//!
//! The domain layer has no dependency on HTTP or database code.

pub mod entities;
pub mod hit_counter;
pub mod moderation;
pub mod operating_mode;
pub mod repositories;
pub mod validation;
