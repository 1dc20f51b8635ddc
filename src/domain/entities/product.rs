//! Product entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::ValidationError;

/// A product in the catalogue.
///
/// `name` is never empty and `price` is always finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with a fresh identifier and the current timestamp.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NameRequired`] if `name` is empty
    /// - [`ValidationError::PriceRequired`] if `price` is zero
    /// - [`ValidationError::InvalidPrice`] if `price` is negative or not finite
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, ValidationError> {
        let product = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Rebuilds a product from stored fields without generating anything.
    pub fn from_parts(id: Uuid, name: String, price: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            price,
            created_at,
        }
    }

    /// Checks every invariant of a full record.
    ///
    /// Used for records that did not come from [`Product::new`], such as
    /// replacement bodies of an update.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(ValidationError::PriceRequired);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }
}
