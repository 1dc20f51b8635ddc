//! Repository trait for users.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for users.
///
/// Users are written once at registration and afterwards only read,
/// mostly by email during login.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, user: &User) -> Result<(), AppError>;

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<User, AppError>;

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<User, AppError>;

    /// Lists every user ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;
}
