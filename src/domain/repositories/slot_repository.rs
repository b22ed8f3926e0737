//! Repository trait for time slots.

use crate::domain::entities::SlotCandidate;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read access to time slots together with the data the availability rules
/// need (barber name, barber services, active booking flag).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Unblocked slots starting in `[from, to)` ordered by start time,
    /// optionally restricted to one barber.
    async fn find_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        barber_id: Option<String>,
    ) -> Result<Vec<SlotCandidate>, AppError>;

    /// Loads a single slot for the booking checks.
    async fn find_for_booking(&self, slot_id: &str) -> Result<Option<SlotCandidate>, AppError>;
}
