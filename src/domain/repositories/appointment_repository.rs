//! Repository trait for appointments.

use crate::domain::entities::{Appointment, AppointmentStatus, NewAppointment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for appointments.
///
/// Returned appointments are fully expanded with service, barber and slot.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAppointmentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Inserts an appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when another active appointment already
    /// holds the slot.
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;

    /// Lists appointments ordered by slot start ascending.
    async fn list(&self, status: Option<AppointmentStatus>)
    -> Result<Vec<Appointment>, AppError>;

    /// Sets the status. Returns `Ok(None)` if the appointment does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when reactivating a cancelled
    /// appointment whose slot has been taken by another booking.
    async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, AppError>;

    /// Number of appointments per status.
    async fn count_by_status(&self) -> Result<Vec<(AppointmentStatus, i64)>, AppError>;
}
