//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// Identity of the caller, inserted into request extensions once the bearer
/// token has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry with the shared [`JwtSigner`](crate::infrastructure::jwt::JwtSigner)
/// 3. Insert [`CurrentUser`] into request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Signature does not verify or the token has expired
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/products", get(list_products_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| missing_token())?;

    let claims = st.signer.verify(&token)?;
    parts.extensions.insert(CurrentUser { id: claims.sub });

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

/// Like [`layer`], but lets requests without an `Authorization` header through.
///
/// A header that is present must still carry a valid token.
pub async fn optional_layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !has_authorization(req.headers()) {
        return Ok(next.run(req).await);
    }

    layer(State(st), req, next).await
}

fn has_authorization(headers: &HeaderMap) -> bool {
    headers.contains_key(header::AUTHORIZATION)
}

fn missing_token() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        serde_json::json!({"reason": "Authorization header is missing or invalid"}),
    )
}
