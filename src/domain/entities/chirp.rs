//! Chirp entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::AcceptedChirp;

/// A stored chirp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl Chirp {
    pub fn new(
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        body: String,
        user_id: Uuid,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            body,
            user_id,
        }
    }
}

/// Input for storing a chirp.
///
/// Only constructible from an [`AcceptedChirp`], so unvalidated text cannot
/// reach the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChirp {
    body: String,
    user_id: Uuid,
}

impl NewChirp {
    pub fn new(accepted: AcceptedChirp, user_id: Uuid) -> Self {
        Self {
            body: accepted.body,
            user_id,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ChirpSubmission;

    #[test]
    fn test_new_chirp_carries_censored_body() {
        let accepted = ChirpSubmission::new("what a sharbert").validate().unwrap();
        let user_id = Uuid::new_v4();

        let new_chirp = NewChirp::new(accepted, user_id);

        assert_eq!(new_chirp.body(), "what a ****");
        assert_eq!(new_chirp.user_id(), user_id);
    }
}
