//! PostgreSQL implementation of the admin session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_user_repository::UserRow;
use crate::domain::entities::{AdminSession, User};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    token_hash: String,
    user_id: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for AdminSession {
    fn from(r: SessionRow) -> Self {
        AdminSession {
            id: r.id,
            token_hash: r.token_hash,
            user_id: r.user_id,
            created_at: r.created_at,
            expires_at: r.expires_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionWithUserRow {
    #[sqlx(flatten)]
    session: SessionRow,
    email: String,
    role: String,
    password_hash: Option<String>,
    user_created_at: DateTime<Utc>,
    user_updated_at: DateTime<Utc>,
}

/// PostgreSQL storage for admin sessions.
///
/// Only token hashes reach the database.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(
        &self,
        token_hash: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<AdminSession, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO admin_sessions (token_hash, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, token_hash, user_id, created_at, expires_at
            "#,
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_with_user(
        &self,
        token_hash: &str,
    ) -> Result<Option<(AdminSession, User)>, AppError> {
        let row = sqlx::query_as::<_, SessionWithUserRow>(
            r#"
            SELECT
                s.id, s.token_hash, s.user_id, s.created_at, s.expires_at,
                u.email, u.role, u.password_hash,
                u.created_at AS user_created_at, u.updated_at AS user_updated_at
            FROM admin_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = User::try_from(UserRow {
            id: row.session.user_id.clone(),
            email: row.email,
            role: row.role,
            password_hash: row.password_hash,
            created_at: row.user_created_at,
            updated_at: row.user_updated_at,
        })?;

        Ok(Some((row.session.into(), user)))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_sessions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn delete_expired_for_user(&self, user_id: &str) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM admin_sessions WHERE user_id = $1 AND expires_at < NOW()")
                .bind(user_id)
                .execute(self.pool.as_ref())
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at < NOW()")
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected())
    }
}
