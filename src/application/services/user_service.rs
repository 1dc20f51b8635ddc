//! User registration service.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering and listing users.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Hashes the password and stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if hashing fails.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, AppError> {
        let user = User::new(name, email, password)?;
        self.repository.create(&user).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_user_stores_hash_only() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|u| u.email == "j@j.com" && u.password != "123456")
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .create_user("John".to_string(), "j@j.com".to_string(), "123456")
            .await
            .unwrap();

        assert!(user.validate_password("123456"));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user("John".to_string(), "j@j.com".to_string(), "123456")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                User::new("a", "a@a.com", "pw").unwrap(),
                User::new("b", "b@b.com", "pw").unwrap(),
            ])
        });

        let service = UserService::new(Arc::new(mock_repo));

        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }
}
