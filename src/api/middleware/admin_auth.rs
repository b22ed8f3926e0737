//! Cookie session gate for admin routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::api::cookies::{SESSION_COOKIE, removal_cookie};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates admin requests using the `admin_session` cookie.
///
/// # Authentication Flow
///
/// 1. Read the `admin_session` cookie
/// 2. Resolve it to a session and user via
///    [`crate::application::services::AuthService::authenticate`]
/// 3. Attach the [`crate::domain::entities::AdminIdentity`] to the request
///    extensions and continue
///
/// # Errors
///
/// - `401` if the cookie is missing
/// - `401` with the cookie cleared if the session is unknown or expired
/// - `403` if the user is not an admin
///
/// # Example
///
/// ```rust,ignore
/// let admin = api::routes::admin_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::layer));
/// ```
pub async fn layer(State(st): State<AppState>, jar: CookieJar, mut req: Request, next: Next) -> Response {
    let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
        return AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Session cookie is missing" }),
        )
        .into_response();
    };

    match st.auth_service.authenticate(&token).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(err @ AppError::Unauthorized { .. }) => {
            (jar.remove(removal_cookie()), err).into_response()
        }
        Err(err) => err.into_response(),
    }
}
