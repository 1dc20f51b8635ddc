//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries.
//!
//! - [`pool`] - Connection pool setup and embedded migrations
//! - [`SqliteProductRepository`] - Product storage and paginated listing
//! - [`SqliteUserRepository`] - User storage and lookup

pub mod pool;
pub mod sqlite_product_repository;
pub mod sqlite_user_repository;

pub use pool::{MIGRATOR, connect, migrate};
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_user_repository::SqliteUserRepository;
