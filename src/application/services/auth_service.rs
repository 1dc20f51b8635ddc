//! Authentication service: password login and bearer token issuance.

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::jwt::JwtSigner;

/// Token returned by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub access_token: String,
}

/// Service that exchanges email and password for a signed token.
///
/// Only issues tokens. Verification of presented tokens happens in
/// [`crate::api::middleware::auth`] through the same [`JwtSigner`].
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    signer: Arc<JwtSigner>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository used to look up credentials
    /// - `signer` - token signer holding the secret and TTL
    pub fn new(repository: Arc<R>, signer: Arc<JwtSigner>) -> Self {
        Self { repository, signer }
    }

    /// Issues a token for the user owning `email` if `password` matches.
    ///
    /// The token's subject is the user id and it expires one TTL after issue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Unauthorized`] if the password does not match.
    /// Returns [`AppError::Storage`] on database errors.
    /// Returns [`AppError::Internal`] if the expiry overflows or signing fails.
    pub async fn get_jwt(&self, email: &str, password: &str) -> Result<AccessToken, AppError> {
        let user = self.repository.find_by_email(email).await?;

        if !user.validate_password(password) {
            tracing::warn!(user_id = %user.id, "password mismatch");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credentials" }),
            ));
        }

        let claims = self.signer.claims_for(user.id, Utc::now())?;
        let access_token = self.signer.sign(&claims)?;

        tracing::info!(user_id = %user.id, exp = claims.exp, "token issued");
        Ok(AccessToken { access_token })
    }
}
