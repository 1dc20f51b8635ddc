#![allow(dead_code)]

use product_api::domain::entities::{Product, User};
use product_api::domain::repositories::{ProductRepository, UserRepository};
use product_api::infrastructure::jwt::JwtSigner;
use product_api::infrastructure::persistence::{
    self, SqliteProductRepository, SqliteUserRepository,
};
use product_api::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TTL: i64 = 300;

/// Fresh in-memory database with migrations applied.
pub async fn setup_pool() -> SqlitePool {
    let pool = persistence::connect("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();
    persistence::migrate(&pool).await.unwrap();
    pool
}

pub fn test_signer() -> Arc<JwtSigner> {
    Arc::new(JwtSigner::new(TEST_SECRET, TEST_TTL))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), test_signer())
}

pub async fn create_test_product(pool: &SqlitePool, name: &str, price: f64) -> Product {
    let product = Product::new(name, price).unwrap();
    SqliteProductRepository::new(Arc::new(pool.clone()))
        .create(&product)
        .await
        .unwrap();
    product
}

pub async fn create_test_user(pool: &SqlitePool, name: &str, email: &str, password: &str) -> User {
    let user = User::new(name, email, password).unwrap();
    SqliteUserRepository::new(Arc::new(pool.clone()))
        .create(&user)
        .await
        .unwrap();
    user
}

/// Signed token for an arbitrary subject, valid for [`TEST_TTL`] seconds.
pub fn bearer_token() -> String {
    let signer = test_signer();
    let claims = signer
        .claims_for(uuid::Uuid::new_v4(), chrono::Utc::now())
        .unwrap();
    signer.sign(&claims).unwrap()
}
