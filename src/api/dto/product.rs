//! DTOs for product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Product;
use crate::domain::repositories::{ProductPage, SortOrder};

/// Body of `POST /products`.
///
/// Name and price rules are enforced by [`Product::new`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

/// Body of `PUT /products/{id}`: a full product record.
///
/// `id` is accepted for symmetry with responses but the path id always wins.
/// A missing `created_at` keeps the stored timestamp.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// JSON representation of a product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            created_at: p.created_at,
        }
    }
}

/// Response of `GET /products`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub page: i64,
    pub limit: i64,
    pub sort: SortOrder,
    pub total: i64,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.products.into_iter().map(ProductResponse::from).collect(),
            page: page.page,
            limit: page.limit,
            sort: page.sort,
            total: page.total,
        }
    }
}
