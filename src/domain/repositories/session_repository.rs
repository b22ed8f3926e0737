//! Repository trait for admin sessions.

use crate::domain::entities::{AdminSession, User};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage for admin sessions, keyed by the hash of the session token.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(
        &self,
        token_hash: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<AdminSession, AppError>;

    /// Finds a session and its owner by token hash.
    async fn find_with_user(
        &self,
        token_hash: &str,
    ) -> Result<Option<(AdminSession, User)>, AppError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;

    /// Deleting an unknown token is not an error.
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), AppError>;

    /// Removes the user's sessions that expired before now. Returns the
    /// number removed.
    async fn delete_expired_for_user(&self, user_id: &str) -> Result<u64, AppError>;

    /// Removes every expired session. Returns the number removed.
    async fn delete_expired(&self) -> Result<u64, AppError>;
}
