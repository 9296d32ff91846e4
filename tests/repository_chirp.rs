mod common;

use chirpy::AppError;
use chirpy::domain::entities::NewChirp;
use chirpy::domain::repositories::ChirpRepository;
use chirpy::domain::validation::ChirpSubmission;
use chirpy::infrastructure::persistence::PgChirpRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_chirp(body: &str, user_id: Uuid) -> NewChirp {
    let accepted = ChirpSubmission::new(body).validate().unwrap();
    NewChirp::new(accepted, user_id)
}

async fn insert_chirp_at(pool: &PgPool, user_id: Uuid, body: &str, created_at: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO chirps (id, created_at, updated_at, body, user_id)
        VALUES (gen_random_uuid(), $1::timestamptz, $1::timestamptz, $2, $3)
        RETURNING id
        "#,
    )
    .bind(created_at)
    .bind(body)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test]
async fn test_create_chirp(pool: PgPool) {
    let user_id = common::insert_user(&pool, "author@example.com").await;
    let repo = PgChirpRepository::new(Arc::new(pool));

    let chirp = repo
        .create(new_chirp("what a kerfuffle", user_id))
        .await
        .unwrap();

    assert_eq!(chirp.body, "what a ****");
    assert_eq!(chirp.user_id, user_id);
}

#[sqlx::test]
async fn test_create_chirp_unknown_user(pool: PgPool) {
    let repo = PgChirpRepository::new(Arc::new(pool.clone()));

    let result = repo.create(new_chirp("orphan", Uuid::new_v4())).await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
    assert_eq!(common::count_rows(&pool, "chirps").await, 0);
}

#[sqlx::test]
async fn test_list_orders_by_created_at(pool: PgPool) {
    let user_id = common::insert_user(&pool, "timeline@example.com").await;
    let third = insert_chirp_at(&pool, user_id, "third", "2024-03-01T00:00:00Z").await;
    let first = insert_chirp_at(&pool, user_id, "first", "2024-01-01T00:00:00Z").await;
    let second = insert_chirp_at(&pool, user_id, "second", "2024-02-01T00:00:00Z").await;
    let repo = PgChirpRepository::new(Arc::new(pool));

    let chirps = repo.list().await.unwrap();

    let ids: Vec<Uuid> = chirps.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[sqlx::test]
async fn test_list_empty(pool: PgPool) {
    let repo = PgChirpRepository::new(Arc::new(pool));

    assert!(repo.list().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let user_id = common::insert_user(&pool, "finder@example.com").await;
    let id = insert_chirp_at(&pool, user_id, "findable", "2024-01-01T00:00:00Z").await;
    let repo = PgChirpRepository::new(Arc::new(pool));

    let chirp = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(chirp.body, "findable");
    assert_eq!(chirp.user_id, user_id);
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgChirpRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}
