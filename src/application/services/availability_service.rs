//! Slot availability for a day or the next few open days.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::AvailableSlot;
use crate::domain::repositories::SlotRepository;
use crate::error::AppError;
use crate::utils::day_bounds::{day_bounds, range_bounds};

/// Available slots grouped under one UTC calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDay {
    pub date: NaiveDate,
    pub slots: Vec<AvailableSlot>,
}

/// Optional narrowing of an availability lookup.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityFilter {
    pub service_id: Option<String>,
    pub barber_id: Option<String>,
}

pub struct AvailabilityService<R: SlotRepository> {
    slots: Arc<R>,
}

impl<R: SlotRepository> AvailabilityService<R> {
    pub fn new(slots: Arc<R>) -> Self {
        Self { slots }
    }

    /// Free slots starting within `date` (UTC), ordered by start.
    ///
    /// Slots with an active booking are dropped. With a service filter, a
    /// slot's barber must offer that service.
    pub async fn for_day(
        &self,
        date: NaiveDate,
        filter: AvailabilityFilter,
    ) -> Result<Vec<AvailableSlot>, AppError> {
        let (start, end) = day_bounds(date);
        let candidates = self
            .slots
            .find_in_range(start, end, filter.barber_id.clone())
            .await?;

        Ok(candidates
            .into_iter()
            .filter(|c| c.is_available_for(filter.service_id.as_deref()))
            .map(|c| c.into_available())
            .collect())
    }

    /// The first `limit` UTC days in `[from, from + horizon_days)` that have
    /// at least one free slot.
    pub async fn next_days(
        &self,
        from: NaiveDate,
        horizon_days: u32,
        limit: usize,
        filter: AvailabilityFilter,
    ) -> Result<Vec<AvailableDay>, AppError> {
        let (start, end) = range_bounds(from, horizon_days);
        let candidates = self
            .slots
            .find_in_range(start, end, filter.barber_id.clone())
            .await?;

        let mut days: Vec<AvailableDay> = Vec::new();

        for candidate in candidates {
            if !candidate.is_available_for(filter.service_id.as_deref()) {
                continue;
            }

            let slot = candidate.into_available();
            let date = slot.start.date_naive();

            match days.last_mut() {
                Some(day) if day.date == date => day.slots.push(slot),
                _ => {
                    if days.len() == limit {
                        break;
                    }
                    days.push(AvailableDay {
                        date,
                        slots: vec![slot],
                    });
                }
            }
        }

        Ok(days)
    }
}
