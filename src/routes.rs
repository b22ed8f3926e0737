//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check: DB and cache (public)
//! - `/api/*`         - REST API; admin routes require the session cookie
//! - everything else  - SPA assets from `STATIC_DIR`, when configured
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Credentialed requests from the configured origins
//! - **Rate limiting** - Per-IP token bucket, stricter for anonymous writes
//! - **Admin gate** - Cookie session check on admin routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin_auth, rate_limit, tracing};
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use axum::routing::get;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed browser origins; empty mirrors the request origin
/// - `static_dir` - directory with the built SPA, served as the fallback
pub fn app_router(
    state: AppState,
    cors_origins: &[String],
    static_dir: Option<&str>,
) -> NormalizePath<Router> {
    let admin = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth::layer,
        ))
        .layer(rate_limit::layer());

    let public = api::routes::public_routes().layer(rate_limit::layer());

    let booking = api::routes::booking_routes().layer(rate_limit::strict_layer());

    let api_router = Router::new().merge(public).merge(booking).merge(admin);

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router);

    if let Some(dir) = static_dir {
        let index = Path::new(dir).join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    let router = router
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// CORS for the SPA. Credentials are allowed so the session cookie is sent.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    ::tracing::warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
