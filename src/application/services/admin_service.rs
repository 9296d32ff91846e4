//! Operator functions: visit metrics and the environment-gated reset.

use std::sync::Arc;

use crate::domain::hit_counter::HitCounter;
use crate::domain::operating_mode::{OperatingMode, ResetPermission};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Result of an allowed reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    /// Counter value discarded by the reset.
    pub hits_cleared: u64,
    /// Number of users removed (their chirps cascade).
    pub users_deleted: u64,
}

/// Service behind `/admin/*`.
///
/// The operating mode is fixed at construction; the reset gate is evaluated
/// from it on every call.
pub struct AdminService<R: UserRepository + ?Sized> {
    hits: Arc<HitCounter>,
    users: Arc<R>,
    mode: OperatingMode,
}

impl<R: UserRepository + ?Sized> AdminService<R> {
    pub fn new(hits: Arc<HitCounter>, users: Arc<R>, mode: OperatingMode) -> Self {
        Self { hits, users, mode }
    }

    /// Current number of file server hits. Read-only.
    pub fn hits(&self) -> u64 {
        self.hits.read()
    }

    /// Resets the hit counter and deletes all users.
    ///
    /// The two steps are not atomic: if the delete fails the counter has
    /// already been cleared and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] outside `dev` mode; nothing is changed.
    /// Returns [`AppError::Internal`] if deleting users fails.
    pub async fn reset(&self) -> Result<ResetOutcome, AppError> {
        match self.mode.reset_permission() {
            ResetPermission::Forbidden => {
                tracing::warn!(mode = self.mode.as_str(), "Reset refused");
                Err(AppError::forbidden(
                    "Reset is only allowed in dev environment.",
                ))
            }
            ResetPermission::Allowed => {
                let hits_cleared = self.hits.reset();

                let users_deleted = self
                    .users
                    .delete_all()
                    .await
                    .map_err(|e| e.context("Couldn't reset the database"))?;

                tracing::info!(hits_cleared, users_deleted, "State reset");

                Ok(ResetOutcome {
                    hits_cleared,
                    users_deleted,
                })
            }
        }
    }
}
