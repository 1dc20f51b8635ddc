//! # Product API
//!
//! A small CRUD service for products and users with JWT login, built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, validation rules and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and JWT signing
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Product CRUD with name-ordered, paginated listing
//! - User registration with Argon2 password hashing
//! - HS256 bearer tokens with a configurable lifetime
//! - Structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! cargo run
//!
//! curl -X POST localhost:8000/users \
//!   -d '{"name":"John","email":"j@j.com","password":"123456"}' \
//!   -H 'Content-Type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, ProductService, UserService};
    pub use crate::domain::entities::{Product, User};
    pub use crate::domain::repositories::{ProductQuery, SortOrder};
    pub use crate::error::AppError;
    pub use crate::infrastructure::jwt::{Claims, JwtSigner};
    pub use crate::state::AppState;
}
