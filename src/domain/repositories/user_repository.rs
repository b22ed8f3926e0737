//! Repository trait for user accounts.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks a user up by email, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Creates an admin, or promotes and re-keys the existing user with that
    /// email.
    async fn upsert_admin(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Returns `Ok(false)` if no user has that email.
    async fn set_password(&self, email: &str, password_hash: &str) -> Result<bool, AppError>;
}
