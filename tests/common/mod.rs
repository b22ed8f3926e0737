#![allow(dead_code)]

use axum::http::HeaderValue;
use axum::{Router, middleware};
use barbershop_booking::api::cookies::SESSION_COOKIE;
use barbershop_booking::api::middleware::admin_auth;
use barbershop_booking::api::routes;
use barbershop_booking::infrastructure::cache::NullCache;
use barbershop_booking::state::AppState;
use barbershop_booking::utils::password::hash_password;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(NullCache::new()),
        SIGNING_SECRET.to_string(),
        Duration::hours(12),
        false,
    )
}

/// `date` at `hour`:00 UTC.
pub fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub async fn create_service(pool: &PgPool, name: &str, price_cents: i32, active: bool) -> String {
    sqlx::query_scalar(
        "INSERT INTO services (name, duration_minutes, price_cents, is_active)
         VALUES ($1, 30, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(price_cents)
    .bind(active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_category(pool: &PgPool, name: &str, slug: &str, sort_order: i32) -> String {
    sqlx::query_scalar(
        "INSERT INTO categories (name, slug, sort_order) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .bind(sort_order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_service_category(pool: &PgPool, service_id: &str, category_id: &str) {
    sqlx::query("INSERT INTO service_categories (service_id, category_id) VALUES ($1, $2)")
        .bind(service_id)
        .bind(category_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_barber(pool: &PgPool, name: &str, service_ids: &[&str]) -> String {
    let id: String = sqlx::query_scalar("INSERT INTO barbers (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();

    for service_id in service_ids {
        sqlx::query("INSERT INTO barber_services (barber_id, service_id) VALUES ($1, $2)")
            .bind(&id)
            .bind(service_id)
            .execute(pool)
            .await
            .unwrap();
    }

    id
}

pub async fn create_slot(
    pool: &PgPool,
    barber_id: Option<&str>,
    start: DateTime<Utc>,
    blocked: bool,
) -> String {
    sqlx::query_scalar(
        "INSERT INTO time_slots (barber_id, start_at, end_at, is_blocked)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(barber_id)
    .bind(start)
    .bind(start + Duration::minutes(30))
    .bind(blocked)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_appointment(
    pool: &PgPool,
    service_id: &str,
    slot_id: &str,
    status: &str,
) -> String {
    sqlx::query_scalar(
        "INSERT INTO appointments (client_name, service_id, slot_id, status)
         VALUES ('Walk In', $1, $2, $3) RETURNING id",
    )
    .bind(service_id)
    .bind(slot_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_user(pool: &PgPool, email: &str, role: &str, password: Option<&str>) -> String {
    let hash = password.map(|p| hash_password(p).unwrap());

    sqlx::query_scalar(
        "INSERT INTO users (email, role, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind(role)
    .bind(hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_admin(pool: &PgPool) -> String {
    create_user(pool, ADMIN_EMAIL, "ADMIN", Some(ADMIN_PASSWORD)).await
}

pub async fn count_sessions(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM admin_sessions")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// The API routes with the admin gate, without rate limiting (which needs
/// the peer address).
pub fn api_app(state: AppState) -> Router {
    let admin = routes::admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin_auth::layer,
    ));

    let api = Router::new()
        .merge(routes::public_routes())
        .merge(routes::booking_routes())
        .merge(admin);

    Router::new().nest("/api", api).with_state(state)
}

/// Logs the seeded admin in and returns the raw session token.
pub async fn login_token(state: &AppState) -> String {
    state
        .auth_service
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap()
        .token
}

pub fn session_cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}")).unwrap()
}
