//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits built on SQLx
//! runtime queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgServiceRepository`] - Service catalog and admin management
//! - [`PgCategoryRepository`] - Categories
//! - [`PgBarberRepository`] - Barbers with their services
//! - [`PgSlotRepository`] - Time slots with availability data
//! - [`PgAppointmentRepository`] - Bookings
//! - [`PgUserRepository`] - User accounts
//! - [`PgSessionRepository`] - Admin sessions

pub mod pg_appointment_repository;
pub mod pg_barber_repository;
pub mod pg_category_repository;
pub mod pg_service_repository;
pub mod pg_session_repository;
pub mod pg_slot_repository;
pub mod pg_user_repository;

pub use pg_appointment_repository::PgAppointmentRepository;
pub use pg_barber_repository::PgBarberRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_service_repository::PgServiceRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_slot_repository::PgSlotRepository;
pub use pg_user_repository::PgUserRepository;

/// Builds an `ILIKE` pattern matching `query` as a literal substring.
pub(crate) fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}
