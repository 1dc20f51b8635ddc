//! Handlers for product endpoints. All of them sit behind
//! [`auth::layer`](crate::api::middleware::auth::layer).

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use crate::api::dto::pagination::ListProductsParams;
use crate::api::dto::product::{
    CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a product.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Request Body
///
/// ```json
/// { "name": "book", "price": 15.0 }
/// ```
///
/// # Errors
///
/// - **400**: malformed body, empty name, zero or negative price
/// - **401**: missing or invalid token
pub async fn create_product_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    tracing::debug!(user_id = %user.id, "create product");

    let product = state
        .product_service
        .create_product(payload.name, payload.price)
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Lists products ordered by name.
///
/// # Endpoint
///
/// `GET /products?page=1&limit=10&sort=asc`
///
/// `limit` absent or `0` returns every product. `sort` is `asc` or `desc`.
///
/// # Errors
///
/// - **400**: non-numeric `page`/`limit` or unknown `sort`
pub async fn list_products_handler(
    State(state): State<AppState>,
    params: Result<Query<ListProductsParams>, QueryRejection>,
) -> Result<Json<ProductListResponse>, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::bad_request("Invalid query parameters", json!({ "reason": e.body_text() }))
    })?;

    let page = state.product_service.list_products(params.to_query()?).await?;

    Ok(Json(page.into()))
}

/// Returns one product.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Errors
///
/// - **400**: `id` is not a UUID
/// - **404**: no such product
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;
    let product = state.product_service.get_product(id).await?;

    Ok(Json(product.into()))
}

/// Replaces a product.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// The id in the path is authoritative. A body without `created_at` keeps
/// the stored creation time.
///
/// # Errors
///
/// - **400**: bad id, malformed body or invalid fields
/// - **404**: no such product
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;

    if let Some(body_id) = payload.id
        && body_id != id
    {
        tracing::debug!(path_id = %id, %body_id, "ignoring id from request body");
    }

    let product = state
        .product_service
        .update_product(id, payload.name, payload.price, payload.created_at)
        .await?;

    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /products/{id}`
///
/// # Errors
///
/// - **400**: bad id
/// - **404**: no such product
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.product_service.delete_product(id).await?;

    Ok(StatusCode::OK)
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::bad_request("Invalid product id", json!({ "id": raw })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_id("not-a-uuid").unwrap_err(),
            AppError::Validation { .. }
        ));
    }
}
