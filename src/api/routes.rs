//! API route configuration.
//!
//! Product endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`]; user registration and login are public.

use crate::api::handlers::{
    create_product_handler, create_user_handler, delete_product_handler, generate_token_handler,
    get_product_handler, list_products_handler, list_users_handler, update_product_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Product routes. The caller adds the auth layer.
///
/// # Endpoints
///
/// - `POST   /products`        - Create a product
/// - `GET    /products`        - List products (paginated, sorted by name)
/// - `GET    /products/{id}`   - Fetch a product
/// - `PUT    /products/{id}`   - Replace a product
/// - `DELETE /products/{id}`   - Delete a product
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            post(create_product_handler).get(list_products_handler),
        )
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}

/// User routes.
///
/// # Endpoints
///
/// - `POST /users`                - Register (public)
/// - `GET  /users`                - List users (token checked only if sent)
/// - `POST /users/generate_token` - Log in (public)
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users_handler)
                .layer(middleware::from_fn_with_state(state, auth::optional_layer))
                .post(create_user_handler),
        )
        .route("/users/generate_token", post(generate_token_handler))
}
