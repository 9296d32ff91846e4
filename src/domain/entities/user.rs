//! User entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl User {
    pub fn new(
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        email: String,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            email,
        }
    }
}
