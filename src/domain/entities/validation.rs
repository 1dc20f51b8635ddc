//! Entity validation failures.

use thiserror::Error;

/// Reasons an entity cannot be constructed or accepted for storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("id is required")]
    IdRequired,
    #[error("name is required")]
    NameRequired,
    #[error("price is required")]
    PriceRequired,
    #[error("invalid price")]
    InvalidPrice,
    #[error("failed to hash password: {0}")]
    PasswordHash(String),
}

impl ValidationError {
    /// Name of the offending field, used in error response details.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::IdRequired => "id",
            ValidationError::NameRequired => "name",
            ValidationError::PriceRequired | ValidationError::InvalidPrice => "price",
            ValidationError::PasswordHash(_) => "password",
        }
    }
}
