//! Admin authentication with server-side sessions.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{AdminIdentity, AdminSession, Role};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::verify_password;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_BYTES: usize = 32;

/// A freshly issued session and the raw token to hand to the client.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: AdminSession,
}

/// Service for admin login, logout and session validation.
///
/// Session tokens are 32 random bytes, hex-encoded. Only their HMAC-SHA256
/// (keyed by `signing_secret`) is stored, so a database dump cannot be
/// replayed as a cookie.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    signing_secret: String,
    session_ttl: Duration,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    pub fn new(
        users: Arc<U>,
        sessions: Arc<S>,
        signing_secret: String,
        session_ttl: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            signing_secret,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn generate_token() -> Result<String, AppError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        getrandom::fill(&mut bytes).map_err(|e| {
            AppError::internal(
                "Failed to generate session token",
                json!({ "reason": e.to_string() }),
            )
        })?;
        Ok(hex::encode(bytes))
    }

    /// Verifies admin credentials and opens a new session.
    ///
    /// The user's expired sessions are purged first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] "Invalid credentials" for an unknown
    /// email, a non-admin account, a missing password hash or a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        let user = self.users.find_by_email(email).await?;

        let Some((user, stored_hash)) = user
            .filter(|u| u.role == Role::Admin)
            .and_then(|u| u.password_hash.clone().map(|h| (u, h)))
        else {
            return Err(invalid_credentials());
        };

        let candidate = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || verify_password(&candidate, &stored_hash))
            .await
            .map_err(|e| {
                AppError::internal(
                    "Password verification failed",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        if !matches {
            return Err(invalid_credentials());
        }

        let purged = self.sessions.delete_expired_for_user(&user.id).await?;
        if purged > 0 {
            tracing::debug!(user_id = %user.id, purged, "Expired sessions purged at login");
        }

        let token = Self::generate_token()?;
        let expires_at = Utc::now() + self.session_ttl;
        let session = self
            .sessions
            .create(&self.hash_token(&token), &user.id, expires_at)
            .await?;

        tracing::info!(user_id = %user.id, "Admin logged in");
        Ok(IssuedSession { token, session })
    }

    /// Deletes the session for `token`. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.sessions
            .delete_by_token_hash(&self.hash_token(token))
            .await
    }

    /// Resolves a session token to the admin it belongs to.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] for an unknown or expired session; an
    ///   expired session is deleted
    /// - [`AppError::Forbidden`] when the owner is not an admin
    pub async fn authenticate(&self, token: &str) -> Result<AdminIdentity, AppError> {
        let Some((session, user)) = self.sessions.find_with_user(&self.hash_token(token)).await?
        else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Unknown session" }),
            ));
        };

        if session.is_expired(Utc::now()) {
            self.sessions.delete_by_id(&session.id).await?;
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session expired" }),
            ));
        }

        if user.role != Role::Admin {
            return Err(AppError::forbidden("Forbidden", json!({})));
        }

        Ok(AdminIdentity {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}

fn invalid_credentials() -> AppError {
    metrics::counter!("admin_login_failures_total").increment(1);
    AppError::unauthorized("Invalid credentials", json!({}))
}
