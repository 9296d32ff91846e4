//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and bulk reset
//! - [`PgChirpRepository`] - Chirp storage and retrieval

pub mod pg_chirp_repository;
pub mod pg_user_repository;
pub mod pool;

pub use pg_chirp_repository::PgChirpRepository;
pub use pg_user_repository::PgUserRepository;
pub use pool::connect;
