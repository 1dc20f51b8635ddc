//! Handlers for user registration, listing and login.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{CreateUserRequest, GenerateTokenRequest, UserResponse};
use crate::api::extractors::ValidatedJson;
use crate::application::services::AccessToken;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "John", "email": "j@j.com", "password": "123456" }
/// ```
///
/// # Errors
///
/// - **400**: missing field or malformed email
/// - **409**: email already registered
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists registered users without their password hashes.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /users/generate_token`
///
/// # Response
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// # Errors
///
/// - **400**: malformed body
/// - **401**: wrong password
/// - **404**: unknown email
pub async fn generate_token_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GenerateTokenRequest>,
) -> Result<Json<AccessToken>, AppError> {
    let token = state
        .auth_service
        .get_jwt(&payload.email, &payload.password)
        .await?;

    Ok(Json(token))
}
