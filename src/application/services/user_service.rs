//! User registration and login.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for user accounts.
///
/// Registration performs no checks of its own; uniqueness of the email is
/// enforced by the store.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the insert.
    pub async fn create_user(&self, email: &str) -> Result<User, AppError> {
        let user = self
            .repository
            .create(email)
            .await
            .map_err(|e| e.context("Couldn't create user"))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Looks up the account for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no such user exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, email: &str) -> Result<User, AppError> {
        self.repository
            .find_by_email(email)
            .await
            .map_err(|e| e.context("Couldn't look up user"))?
            .ok_or_else(|| AppError::unauthorized("Incorrect email"))
    }
}
