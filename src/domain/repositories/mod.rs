//! Repository trait definitions for the domain layer.
//!
//! The traits describe what the HTTP layer needs from the relational store;
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User creation, lookup and bulk reset
//! - [`ChirpRepository`] - Chirp creation and retrieval

pub mod chirp_repository;
pub mod user_repository;

pub use chirp_repository::ChirpRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use chirp_repository::MockChirpRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
