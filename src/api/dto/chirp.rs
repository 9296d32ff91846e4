//! DTOs for chirp endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Chirp;
use crate::domain::validation::ChirpSubmission;

/// Request body for `POST /api/chirps`.
///
/// `user_id` identifies the author.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

impl CreateChirpRequest {
    /// Splits the request into the part that is validated and the author.
    pub fn into_parts(self) -> (ChirpSubmission, Uuid) {
        (ChirpSubmission::new(self.body), self.user_id)
    }
}

/// Public representation of a chirp.
#[derive(Debug, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

/// Response of `POST /api/validate_chirp`.
#[derive(Debug, Serialize)]
pub struct CleanedChirpResponse {
    pub cleaned_body: String,
}
