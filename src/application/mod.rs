//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and enforce the booking rules. They
//! are generic over the repository traits so they can be unit-tested against
//! `mockall` mocks.
//!
//! # Available Services
//!
//! - [`services::CatalogService`] - Public catalog reads with caching
//! - [`services::ServiceAdminService`] - Admin service management
//! - [`services::CategoryService`] - Admin category management and seeding
//! - [`services::AvailabilityService`] - Free slots per day
//! - [`services::BookingService`] - Booking and appointment status
//! - [`services::AuthService`] - Admin login and session validation

pub mod services;
