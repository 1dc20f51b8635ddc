//! JSON body extractor that validates and rejects with [`AppError`].

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Deserializes a JSON body and runs its `validator` rules.
///
/// Any decode failure (bad syntax, wrong types, missing fields, wrong
/// content type) becomes a 400 with the usual error body.
///
/// ```rust,ignore
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUserRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() })))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
