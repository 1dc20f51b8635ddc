//! Product management service.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::repositories::{ProductPage, ProductQuery, ProductRepository};
use crate::error::AppError;

/// Service for product CRUD and listing.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty or the price is not positive.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create_product(&self, name: String, price: f64) -> Result<Product, AppError> {
        let product = Product::new(name, price)?;
        self.repository.create(&product).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn get_product(&self, id: Uuid) -> Result<Product, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Replaces a product's fields.
    ///
    /// The identifier is always the one addressed; `created_at` keeps the
    /// stored value unless the caller supplies one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Validation`] if the replacement is invalid.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn update_product(
        &self,
        id: Uuid,
        name: String,
        price: f64,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Product, AppError> {
        let existing = self.repository.find_by_id(id).await?;

        let product = Product::from_parts(
            id,
            name,
            price,
            created_at.unwrap_or(existing.created_at),
        );
        product.validate()?;

        self.repository.update(&product).await?;

        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;

        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Lists one page of products ordered by name.
    pub async fn list_products(&self, query: ProductQuery) -> Result<ProductPage, AppError> {
        self.repository.find_all(query).await
    }
}
