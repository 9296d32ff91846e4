//! Chirp creation and retrieval.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Chirp, NewChirp};
use crate::domain::repositories::ChirpRepository;
use crate::domain::validation::ChirpSubmission;
use crate::error::AppError;

/// Service for chirps.
///
/// Every submission goes through the validation pipeline before the
/// repository is touched.
pub struct ChirpService<R: ChirpRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ChirpRepository + ?Sized> ChirpService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates, censors and stores a chirp for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is too long; nothing is
    /// stored in that case.
    /// Returns [`AppError::Internal`] if the store rejects the insert.
    pub async fn create_chirp(
        &self,
        submission: ChirpSubmission,
        user_id: Uuid,
    ) -> Result<Chirp, AppError> {
        let accepted = submission.validate()?;

        let chirp = self
            .repository
            .create(NewChirp::new(accepted, user_id))
            .await
            .map_err(|e| e.context("Couldn't create chirp"))?;

        tracing::debug!(chirp_id = %chirp.id, user_id = %user_id, "Chirp created");
        Ok(chirp)
    }

    /// Returns all chirps, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_chirps(&self) -> Result<Vec<Chirp>, AppError> {
        self.repository
            .list()
            .await
            .map_err(|e| e.context("Couldn't retrieve chirps"))
    }

    /// Returns a single chirp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the chirp does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_chirp(&self, id: Uuid) -> Result<Chirp, AppError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| e.context("Couldn't retrieve chirp"))?
            .ok_or_else(|| AppError::not_found("Chirp not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockChirpRepository;
    use crate::domain::validation::{MAX_CHIRP_LENGTH, ValidationError};
    use chrono::Utc;

    fn stored(new_chirp: &NewChirp) -> Chirp {
        let now = Utc::now();
        Chirp::new(
            Uuid::new_v4(),
            now,
            now,
            new_chirp.body().to_string(),
            new_chirp.user_id(),
        )
    }

    #[tokio::test]
    async fn test_create_chirp_stores_censored_body() {
        let mut mock_repo = MockChirpRepository::new();
        let user_id = Uuid::new_v4();

        mock_repo
            .expect_create()
            .withf(move |c| c.body() == "hello **** world" && c.user_id() == user_id)
            .times(1)
            .returning(|c| Ok(stored(&c)));

        let service = ChirpService::new(Arc::new(mock_repo));

        let chirp = service
            .create_chirp(ChirpSubmission::new("hello Fornax world"), user_id)
            .await
            .unwrap();

        assert_eq!(chirp.body, "hello **** world");
        assert_eq!(chirp.user_id, user_id);
    }

    #[tokio::test]
    async fn test_create_chirp_too_long_never_reaches_repository() {
        let mut mock_repo = MockChirpRepository::new();
        mock_repo.expect_create().times(0);

        let service = ChirpService::new(Arc::new(mock_repo));

        let err = service
            .create_chirp(
                ChirpSubmission::new("x".repeat(MAX_CHIRP_LENGTH + 1)),
                Uuid::new_v4(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::TooLong)
        ));
    }

    #[tokio::test]
    async fn test_create_chirp_persistence_failure() {
        let mut mock_repo = MockChirpRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::from(sqlx::Error::RowNotFound)));

        let service = ChirpService::new(Arc::new(mock_repo));

        let err = service
            .create_chirp(ChirpSubmission::new("fine"), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Couldn't create chirp");
    }

    #[tokio::test]
    async fn test_get_chirp_not_found() {
        let mut mock_repo = MockChirpRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ChirpService::new(Arc::new(mock_repo));

        let err = service.get_chirp(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_chirps() {
        let mut mock_repo = MockChirpRepository::new();
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let chirps = vec![
            Chirp::new(Uuid::new_v4(), now, now, "first".to_string(), user_id),
            Chirp::new(Uuid::new_v4(), now, now, "second".to_string(), user_id),
        ];

        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(chirps.clone()));

        let service = ChirpService::new(Arc::new(mock_repo));

        let list = service.list_chirps().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].body, "first");
    }
}
