//! API route configuration.
//!
//! Routes are split by the protection they need. The top-level router in
//! [`crate::routes`] attaches rate limits and the admin gate to each group.

use crate::api::handlers::{
    admin_categories, admin_services, availability_handler, create_appointment_handler,
    get_appointment_handler, list_appointments_handler, list_barbers_handler,
    list_categories_handler, list_services_handler, login_handler, logout_handler,
    next_availability_handler, session_handler, update_appointment_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Anonymous read endpoints.
///
/// # Endpoints
///
/// - `GET  /services`            - Active services
/// - `GET  /categories`          - Active categories
/// - `GET  /barbers`             - Barbers, optionally by `serviceId`
/// - `GET  /availability`        - Free slots on one day
/// - `GET  /availability/next`   - Next days with free slots
/// - `GET  /appointments/{id}`   - One appointment (confirmation page)
/// - `POST /auth/logout`         - End the current session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services_handler))
        .route("/categories", get(list_categories_handler))
        .route("/barbers", get(list_barbers_handler))
        .route("/availability", get(availability_handler))
        .route("/availability/next", get(next_availability_handler))
        .route("/appointments/{id}", get(get_appointment_handler))
        .route("/auth/logout", post(logout_handler))
}

/// Anonymous writes, kept under a stricter rate limit.
///
/// - `POST /appointments` - Book a slot
/// - `POST /auth/login`   - Open an admin session
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment_handler))
        .route("/auth/login", post(login_handler))
}

/// Endpoints behind the admin session gate.
///
/// # Endpoints
///
/// - `GET    /auth/session`               - Signed-in admin
/// - `GET    /appointments`               - All appointments, by `status`
/// - `PATCH  /appointments/{id}/status`   - Change status
/// - `GET    /admin/services`             - Search services
/// - `POST   /admin/services`             - Create a service
/// - `PATCH  /admin/services/{id}`        - Update a service
/// - `DELETE /admin/services/{id}`        - Delete a service
/// - `GET    /admin/categories`           - Search categories
/// - `POST   /admin/categories`           - Create a category
/// - `PATCH  /admin/categories/{id}`      - Update a category
/// - `DELETE /admin/categories/{id}`      - Delete a category
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/session", get(session_handler))
        .route("/appointments", get(list_appointments_handler))
        .route(
            "/appointments/{id}/status",
            patch(update_appointment_status_handler),
        )
        .route(
            "/admin/services",
            get(admin_services::list_services_handler)
                .post(admin_services::create_service_handler),
        )
        .route(
            "/admin/services/{id}",
            patch(admin_services::update_service_handler)
                .delete(admin_services::delete_service_handler),
        )
        .route(
            "/admin/categories",
            get(admin_categories::list_categories_handler)
                .post(admin_categories::create_category_handler),
        )
        .route(
            "/admin/categories/{id}",
            patch(admin_categories::update_category_handler)
                .delete(admin_categories::delete_category_handler),
        )
}
