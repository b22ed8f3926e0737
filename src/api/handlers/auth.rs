//! Handlers for admin login, logout and session lookup.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use validator::Validate;

use crate::api::cookies::{SESSION_COOKIE, removal_cookie, session_cookie};
use crate::api::dto::auth::{LoginRequest, SessionResponse};
use crate::api::extract::JsonBody;
use crate::domain::entities::AdminIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Opens an admin session and sets the `admin_session` cookie.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// - 400 if the email is malformed or the password is shorter than 8 chars
/// - 401 "Invalid credentials" for any authentication failure
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let issued = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let cookie = session_cookie(
        issued.token,
        state.auth_service.session_ttl(),
        state.cookie_secure,
    );

    Ok((jar.add(cookie), StatusCode::NO_CONTENT))
}

/// Ends the current session, if any, and clears the cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
///
/// Always answers 204.
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && let Err(e) = state.auth_service.logout(cookie.value()).await
    {
        tracing::warn!(error = %e, "Failed to delete session on logout");
    }

    (jar.remove(removal_cookie()), StatusCode::NO_CONTENT)
}

/// Returns the signed-in admin.
///
/// # Endpoint
///
/// `GET /api/auth/session` (admin)
pub async fn session_handler(Extension(identity): Extension<AdminIdentity>) -> Json<SessionResponse> {
    Json(identity.into())
}
