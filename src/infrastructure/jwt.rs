//! HS256 bearer token signing and verification.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Token payload.
///
/// A fixed shape: the subject is always a user id and `exp` is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims for `subject` issued at `issued_at`, expiring `ttl_seconds` later.
    ///
    /// Returns `None` if the expiry is not representable.
    pub fn new(subject: Uuid, issued_at: DateTime<Utc>, ttl_seconds: i64) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(TimeDelta::try_seconds(ttl_seconds)?)?;

        Some(Self {
            sub: subject,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }
}

/// Signs and verifies tokens with a shared secret.
///
/// Built once from configuration and shared through [`crate::state::AppState`].
#[derive(Clone)]
pub struct JwtSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl JwtSigner {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Builds claims for `subject` expiring one TTL after `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry overflows the calendar.
    pub fn claims_for(&self, subject: Uuid, issued_at: DateTime<Utc>) -> Result<Claims, AppError> {
        Claims::new(subject, issued_at, self.ttl_seconds).ok_or_else(|| {
            tracing::error!(ttl_seconds = self.ttl_seconds, "token expiry out of range");
            AppError::internal("Token lifetime out of range", json!({}))
        })
    }

    /// Signs `claims` into a compact JWT.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails, which only happens on
    /// serializer or key errors.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign token");
            AppError::internal("Failed to sign token", json!({}))
        })
    }

    /// Decodes `token`, checking its signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, forged or expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected bearer token");
                AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid or expired token" }))
            })
    }
}
