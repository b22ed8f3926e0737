//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! The admin handlers share names with the public catalog ones, so only
//! the public and booking handlers are re-exported here.

pub mod admin_categories;
pub mod admin_services;
pub mod appointments;
pub mod auth;
pub mod availability;
pub mod catalog;
pub mod health;

pub use appointments::{
    create_appointment_handler, get_appointment_handler, list_appointments_handler,
    update_appointment_status_handler,
};
pub use auth::{login_handler, logout_handler, session_handler};
pub use availability::{availability_handler, next_availability_handler};
pub use catalog::{list_barbers_handler, list_categories_handler, list_services_handler};
pub use health::health_handler;
