//! Repository trait for products and the listing query types.

use crate::domain::entities::Product;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Direction of the by-name ordering of a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("sort must be 'asc' or 'desc', got '{other}'")),
        }
    }
}

/// Listing parameters.
///
/// `page` is 1-indexed. A non-positive `limit` disables pagination and the
/// whole table is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: i64,
    pub limit: i64,
    pub sort: SortOrder,
}

impl ProductQuery {
    pub fn new(page: i64, limit: i64, sort: SortOrder) -> Self {
        Self { page, limit, sort }
    }

    /// Returns `(offset, limit)` for a paginated query, or `None` for "everything".
    ///
    /// Pages below 1 are read as page 1.
    pub fn window(&self) -> Option<(i64, i64)> {
        if self.limit <= 0 {
            return None;
        }
        let page = self.page.max(1);
        let offset = (page - 1).saturating_mul(self.limit);
        Some((offset, self.limit))
    }
}

/// One page of products together with the position it was taken from.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: i64,
    pub limit: i64,
    pub sort: SortOrder,
    /// Number of stored products, independent of the window.
    pub total: i64,
}

/// Repository interface for products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteProductRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, product: &Product) -> Result<(), AppError>;

    /// Finds a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Product, AppError>;

    /// Replaces every field of the stored product with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn update(&self, product: &Product) -> Result<(), AppError>;

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Lists products ordered by name, sliced by `query`.
    ///
    /// Pages past the end yield an empty or partial `products` list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_all(&self, query: ProductQuery) -> Result<ProductPage, AppError>;
}
