//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests of the application services.
//!
//! # Available Repositories
//!
//! - [`ServiceRepository`] - Service catalog and admin management
//! - [`CategoryRepository`] - Category catalog and admin management
//! - [`BarberRepository`] - Barber listing
//! - [`SlotRepository`] - Time slots with availability data
//! - [`AppointmentRepository`] - Bookings
//! - [`UserRepository`] - User accounts
//! - [`SessionRepository`] - Admin sessions

pub mod appointment_repository;
pub mod barber_repository;
pub mod category_repository;
pub mod service_repository;
pub mod session_repository;
pub mod slot_repository;
pub mod user_repository;

pub use appointment_repository::AppointmentRepository;
pub use barber_repository::BarberRepository;
pub use category_repository::CategoryRepository;
pub use service_repository::ServiceRepository;
pub use session_repository::SessionRepository;
pub use slot_repository::SlotRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(test)]
pub use barber_repository::MockBarberRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use slot_repository::MockSlotRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
