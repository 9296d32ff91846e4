#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use chirpy::AppError;
use chirpy::domain::entities::{Chirp, NewChirp, User};
use chirpy::domain::operating_mode::OperatingMode;
use chirpy::domain::repositories::{ChirpRepository, UserRepository};
use chirpy::routes::{StaticDirs, app_router};
use chirpy::state::AppState;

/// In-memory stand-in for the PostgreSQL store.
///
/// Enforces the same constraints the schema does: unique emails, chirps must
/// reference an existing user, and deleting users cascades to their chirps.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    chirps: Mutex<Vec<Chirp>>,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent write fail like a lost database connection.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn chirp_count(&self) -> usize {
        self.chirps.lock().unwrap().len()
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::from(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, email: &str) -> Result<User, AppError> {
        self.check_writable()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::internal("Database error"));
        }

        let now = Utc::now();
        let user = User::new(Uuid::new_v4(), now, now, email.to_string());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        self.check_writable()?;

        let mut users = self.users.lock().unwrap();
        let deleted = users.len() as u64;
        users.clear();
        self.chirps.lock().unwrap().clear();
        Ok(deleted)
    }
}

#[async_trait]
impl ChirpRepository for InMemoryStore {
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, AppError> {
        self.check_writable()?;

        let owner_exists = self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == new_chirp.user_id());
        if !owner_exists {
            return Err(AppError::internal("Database error"));
        }

        let now = Utc::now();
        let chirp = Chirp::new(
            Uuid::new_v4(),
            now,
            now,
            new_chirp.body().to_string(),
            new_chirp.user_id(),
        );
        self.chirps.lock().unwrap().push(chirp.clone());
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>, AppError> {
        Ok(self.chirps.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, AppError> {
        let chirps = self.chirps.lock().unwrap();
        Ok(chirps.iter().find(|c| c.id == id).cloned())
    }
}

pub fn fixture_dirs() -> StaticDirs {
    let root = env!("CARGO_MANIFEST_DIR");
    StaticDirs {
        app: format!("{root}/tests/fixtures/app"),
        assets: format!("{root}/tests/fixtures/assets"),
    }
}

pub fn create_test_state(mode: OperatingMode) -> (AppState, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let users: Arc<dyn UserRepository> = store.clone();
    let chirps: Arc<dyn ChirpRepository> = store.clone();

    (AppState::new(users, chirps, mode), store)
}

/// Production router over an in-memory store.
pub fn create_test_server(mode: OperatingMode) -> (TestServer, AppState, Arc<InMemoryStore>) {
    let (state, store) = create_test_state(mode);
    let app = app_router(state.clone(), &fixture_dirs());
    let server = TestServer::new(app).unwrap();

    (server, state, store)
}

/// Inserts a user directly, bypassing the repository under test.
pub async fn insert_user(pool: &sqlx::PgPool, email: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, email) VALUES (gen_random_uuid(), $1) RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &sqlx::PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_user(server: &TestServer, email: &str) -> Value {
    let response = server
        .post("/api/users")
        .json(&serde_json::json!({ "email": email }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
