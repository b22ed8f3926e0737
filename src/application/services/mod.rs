//! Business logic services for the application layer.

pub mod auth_service;
pub mod availability_service;
pub mod booking_service;
pub mod catalog_service;
pub mod category_service;
pub mod service_admin_service;

pub use auth_service::{AuthService, IssuedSession};
pub use availability_service::{AvailabilityFilter, AvailabilityService, AvailableDay};
pub use booking_service::{BookingRequest, BookingService};
pub use catalog_service::{CatalogService, invalidate_catalog};
pub use category_service::{CategoryService, SeedReport};
pub use service_admin_service::ServiceAdminService;
