//! SQLite implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::repositories::{ProductPage, ProductQuery, ProductRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product::from_parts(r.id, r.name, r.price, r.created_at)
    }
}

/// SQLite repository for products.
///
/// The sort direction is interpolated from [`crate::domain::repositories::SortOrder::as_sql`],
/// which only yields `ASC` or `DESC`; every value is bound.
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, created_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Product::from)
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, price = ?, created_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.created_at)
        .bind(product.id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Product not found",
                json!({ "id": product.id }),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn find_all(&self, query: ProductQuery) -> Result<ProductPage, AppError> {
        let order = query.sort.as_sql();

        let rows = match query.window() {
            Some((offset, limit)) => {
                let sql = format!(
                    "SELECT id, name, price, created_at FROM products \
                     ORDER BY name {order}, created_at {order}, id {order} \
                     LIMIT ? OFFSET ?"
                );
                sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT id, name, price, created_at FROM products \
                     ORDER BY name {order}, created_at {order}, id {order}"
                );
                sqlx::query_as::<_, ProductRow>(&sql)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
        };

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(ProductPage {
            products: rows.into_iter().map(Product::from).collect(),
            page: query.page.max(1),
            limit: query.limit,
            sort: query.sort,
            total,
        })
    }
}
