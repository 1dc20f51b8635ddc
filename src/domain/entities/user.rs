//! User entity with Argon2 password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// A registered user.
///
/// `password` holds the Argon2id PHC string, never the plaintext.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

// Keep the hash out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl User {
    /// Creates a user with a fresh identifier, hashing `password` with a random salt.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PasswordHash`] if hashing fails.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> Result<Self, ValidationError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ValidationError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: hash,
        })
    }

    /// Rebuilds a user from stored fields; `password` must already be a hash.
    pub fn from_parts(id: Uuid, name: String, email: String, password: String) -> Self {
        Self {
            id,
            name,
            email,
            password,
        }
    }

    /// Returns true only if `candidate` matches the stored hash.
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn validate_password(&self, candidate: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("John Doe", "j@j.com", "123456").unwrap();

        assert!(!user.id.is_nil());
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "j@j.com");
        assert_ne!(user.password, "123456");
        assert!(user.password.starts_with("$argon2"));
    }

    #[test]
    fn test_validate_password() {
        let user = User::new("John Doe", "j@j.com", "123456").unwrap();

        assert!(user.validate_password("123456"));
        assert!(!user.validate_password("1234567"));
        assert!(!user.validate_password(""));
        assert!(!user.validate_password("123456 "));
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = User::new("a", "a@a.com", "secret").unwrap();
        let b = User::new("b", "b@b.com", "secret").unwrap();

        assert_ne!(a.password, b.password);
        assert!(a.validate_password("secret"));
        assert!(b.validate_password("secret"));
    }

    #[test]
    fn test_malformed_hash_never_validates() {
        let user = User::from_parts(
            Uuid::new_v4(),
            "x".to_string(),
            "x@x.com".to_string(),
            "plaintext".to_string(),
        );
        assert!(!user.validate_password("plaintext"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User::new("John Doe", "j@j.com", "123456").unwrap();
        let debug = format!("{:?}", user);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&user.password));
    }
}
