//! Core domain entities representing the booking data model.
//!
//! Entities are plain data structures. Creation and partial-update inputs use
//! separate structs:
//! - `NewService`, `NewCategory`, `NewAppointment` - For creating new records
//! - `ServicePatch`, `CategoryPatch` - For partial updates
//!
//! # Entity Types
//!
//! - [`Service`] - A bookable offering
//! - [`Category`] - A grouping of services
//! - [`Barber`] - A staff member offering a subset of services
//! - [`TimeSlot`] - A start/end interval assignable to one barber
//! - [`Appointment`] - A client's booking of a service at a slot
//! - [`User`] / [`AdminSession`] - Accounts and server-side sessions

pub mod appointment;
pub mod barber;
pub mod category;
pub mod listing;
pub mod service;
pub mod time_slot;
pub mod user;

pub use appointment::{
    Appointment, AppointmentBarber, AppointmentService, AppointmentSlot, AppointmentStatus,
    NewAppointment,
};
pub use barber::Barber;
pub use category::{Category, CategoryFilter, CategoryPatch, CategorySort, NewCategory};
pub use listing::{PageRequest, Paged, StatusFilter};
pub use service::{
    CategoryRef, NewService, Service, ServiceFilter, ServicePatch, ServiceSort, ServiceSummary,
};
pub use time_slot::{AvailableSlot, SlotCandidate, TimeSlot};
pub use user::{AdminIdentity, AdminSession, Role, User};
