//! DTOs for booking and appointment management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::application::services::BookingRequest;
use crate::domain::entities::{
    Appointment, AppointmentBarber, AppointmentService, AppointmentSlot, AppointmentStatus,
};
use crate::error::AppError;

pub const DEFAULT_SOURCE: &str = "web";

/// `POST /api/appointments` body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub client_name: String,

    #[validate(email(message = "Invalid email"))]
    #[serde(default)]
    pub client_email: Option<String>,

    #[validate(length(min = 7, max = 20, message = "Phone must be 7-20 characters"))]
    #[serde(default)]
    pub client_phone: Option<String>,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    #[serde(default)]
    pub notes: Option<String>,

    #[validate(length(min = 1, message = "Service is required"))]
    pub service_id: String,

    #[validate(length(min = 1, message = "Slot is required"))]
    pub slot_id: String,

    #[validate(length(max = 50, message = "Source must be at most 50 characters"))]
    #[serde(default)]
    pub source: Option<String>,
}

impl From<CreateAppointmentRequest> for BookingRequest {
    fn from(r: CreateAppointmentRequest) -> Self {
        Self {
            client_name: r.client_name,
            client_email: r.client_email,
            client_phone: r.client_phone,
            notes: r.notes,
            service_id: r.service_id,
            slot_id: r.slot_id,
            source: r.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        }
    }
}

/// `GET /api/appointments` query string.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentsQuery {
    #[serde(default)]
    pub status: Option<String>,
}

impl AppointmentsQuery {
    pub fn status(&self) -> Result<Option<AppointmentStatus>, AppError> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_status)
            .transpose()
    }
}

/// `PATCH /api/appointments/{id}/status` body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub fn parse_status(raw: &str) -> Result<AppointmentStatus, AppError> {
    raw.parse::<AppointmentStatus>().map_err(|_| {
        AppError::bad_request(
            "Invalid status",
            json!({
                "field": "status",
                "allowed": AppointmentStatus::ALL.map(AppointmentStatus::as_str),
            }),
        )
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentServiceItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i32,
    pub is_active: bool,
}

impl From<AppointmentService> for AppointmentServiceItem {
    fn from(s: AppointmentService) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            duration_minutes: s.duration_minutes,
            price_cents: s.price_cents,
            is_active: s.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppointmentBarberItem {
    pub id: String,
    pub name: String,
}

impl From<AppointmentBarber> for AppointmentBarberItem {
    fn from(b: AppointmentBarber) -> Self {
        Self {
            id: b.id,
            name: b.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppointmentSlotItem {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<AppointmentSlot> for AppointmentSlotItem {
    fn from(s: AppointmentSlot) -> Self {
        Self {
            id: s.id,
            start: s.start,
            end: s.end,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: String,
    pub status: AppointmentStatus,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub notes: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub service: AppointmentServiceItem,
    pub barber: Option<AppointmentBarberItem>,
    pub slot: AppointmentSlotItem,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            status: a.status,
            client_name: a.client_name,
            client_email: a.client_email,
            client_phone: a.client_phone,
            notes: a.notes,
            source: a.source,
            created_at: a.created_at,
            updated_at: a.updated_at,
            service: a.service.into(),
            barber: a.barber.map(Into::into),
            slot: a.slot.into(),
        }
    }
}
