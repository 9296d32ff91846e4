//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request bodies
//! are decoded with [`crate::domain::validation::decode_json`] so that every
//! decode failure maps to the same 400 response.

pub mod chirp;
pub mod user;
