//! Time slot entity and the availability rules applied to it.

use chrono::{DateTime, Utc};

/// A fixed start/end interval assignable to one barber.
#[derive(Debug, Clone)]
pub struct TimeSlot {
    pub id: String,
    pub barber_id: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_blocked: bool,
}

/// A slot loaded together with everything needed to decide whether it can be
/// offered: its barber's name and services, and whether an active booking
/// already occupies it.
#[derive(Debug, Clone)]
pub struct SlotCandidate {
    pub slot: TimeSlot,
    pub barber_name: Option<String>,
    pub barber_service_ids: Vec<String>,
    pub has_active_booking: bool,
}

impl SlotCandidate {
    /// Decides whether the slot can be offered for `service_id`.
    ///
    /// Blocked or booked slots are never available. When a service is
    /// requested, a slot with a barber is only available if that barber
    /// offers the service; a slot without a barber passes the service check.
    pub fn is_available_for(&self, service_id: Option<&str>) -> bool {
        if self.slot.is_blocked || self.has_active_booking {
            return false;
        }

        match (service_id, &self.slot.barber_id) {
            (Some(service_id), Some(_)) => {
                self.barber_service_ids.iter().any(|id| id == service_id)
            }
            _ => true,
        }
    }

    pub fn into_available(self) -> AvailableSlot {
        AvailableSlot {
            slot_id: self.slot.id,
            barber_id: self.slot.barber_id,
            barber_name: self.barber_name,
            start: self.slot.start,
            end: self.slot.end,
        }
    }
}

/// A bookable slot as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlot {
    pub slot_id: String,
    pub barber_id: Option<String>,
    pub barber_name: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
