//! Repository trait for chirp data access.

use crate::domain::entities::{Chirp, NewChirp};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for chirps.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgChirpRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Stores a validated chirp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including an
    /// unknown `user_id`.
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, AppError>;

    /// Lists all chirps, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Chirp>, AppError>;

    /// Finds a chirp by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, AppError>;
}
