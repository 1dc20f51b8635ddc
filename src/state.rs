//! Shared application state injected into handlers and middleware.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, ProductService, UserService};
use crate::infrastructure::jwt::JwtSigner;
use crate::infrastructure::persistence::{SqliteProductRepository, SqliteUserRepository};

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub product_service: Arc<ProductService<SqliteProductRepository>>,
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub auth_service: Arc<AuthService<SqliteUserRepository>>,
    pub signer: Arc<JwtSigner>,
}

impl AppState {
    /// Wires repositories and services over one pool and one signer.
    pub fn new(pool: Arc<SqlitePool>, signer: Arc<JwtSigner>) -> Self {
        let product_repo = Arc::new(SqliteProductRepository::new(pool.clone()));
        let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

        Self {
            product_service: Arc::new(ProductService::new(product_repo)),
            user_service: Arc::new(UserService::new(user_repo.clone())),
            auth_service: Arc::new(AuthService::new(user_repo, signer.clone())),
            signer,
            pool,
        }
    }
}
