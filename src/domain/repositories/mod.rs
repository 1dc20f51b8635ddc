//! Repository trait definitions for the domain layer.
//!
//! Each entity type gets its own storage capability with the same CRUD shape.
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` for unit tests.
//!
//! - [`ProductRepository`] - Product CRUD and the paginated, sorted listing
//! - [`UserRepository`] - User registration and lookup by email

pub mod product_repository;
pub mod user_repository;

pub use product_repository::{ProductPage, ProductQuery, ProductRepository, SortOrder};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
