//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! - [`services::product_service::ProductService`] - Product CRUD and listing
//! - [`services::user_service::UserService`] - Registration and user listing
//! - [`services::auth_service::AuthService`] - Credential check and token issuance

pub mod services;
