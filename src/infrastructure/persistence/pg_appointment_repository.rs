//! PostgreSQL implementation of the appointment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::is_unique_violation;
use crate::domain::entities::{
    Appointment, AppointmentBarber, AppointmentService, AppointmentSlot, AppointmentStatus,
    NewAppointment,
};
use crate::domain::repositories::AppointmentRepository;
use crate::error::AppError;

const SELECT_APPOINTMENT: &str = r#"
    SELECT
        a.id, a.client_name, a.client_email, a.client_phone, a.notes, a.status, a.source,
        a.created_at, a.updated_at,
        s.id AS service_id, s.name AS service_name, s.description AS service_description,
        s.duration_minutes, s.price_cents, s.is_active AS service_is_active,
        b.id AS barber_id, b.name AS barber_name,
        t.id AS slot_id, t.start_at, t.end_at
    FROM appointments a
    JOIN services s ON s.id = a.service_id
    JOIN time_slots t ON t.id = a.slot_id
    LEFT JOIN barbers b ON b.id = a.barber_id
"#;

#[derive(sqlx::FromRow)]
struct AppointmentRow {
    id: String,
    client_name: String,
    client_email: Option<String>,
    client_phone: Option<String>,
    notes: Option<String>,
    status: String,
    source: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    service_id: String,
    service_name: String,
    service_description: Option<String>,
    duration_minutes: i32,
    price_cents: i32,
    service_is_active: bool,
    barber_id: Option<String>,
    barber_name: Option<String>,
    slot_id: String,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = AppError;

    fn try_from(r: AppointmentRow) -> Result<Self, Self::Error> {
        let status = r
            .status
            .parse::<AppointmentStatus>()
            .map_err(|e| AppError::internal(e, json!({ "id": r.id })))?;

        let barber = match (r.barber_id, r.barber_name) {
            (Some(id), Some(name)) => Some(AppointmentBarber { id, name }),
            _ => None,
        };

        Ok(Appointment {
            id: r.id,
            client_name: r.client_name,
            client_email: r.client_email,
            client_phone: r.client_phone,
            notes: r.notes,
            status,
            source: r.source,
            service: AppointmentService {
                id: r.service_id,
                name: r.service_name,
                description: r.service_description,
                duration_minutes: r.duration_minutes,
                price_cents: r.price_cents,
                is_active: r.service_is_active,
            },
            barber,
            slot: AppointmentSlot {
                id: r.slot_id,
                start: r.start_at,
                end: r.end_at,
            },
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

fn slot_taken(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        AppError::conflict("Time slot already booked", json!({}))
    } else {
        e.into()
    }
}

/// PostgreSQL repository for appointments.
///
/// The partial unique index `appointments_active_slot_key` rejects a second
/// active appointment for the same slot; such violations surface as
/// [`AppError::Conflict`].
pub struct PgAppointmentRepository {
    pool: Arc<PgPool>,
}

impl PgAppointmentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load(&self, id: &str) -> Result<Appointment, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("Appointment vanished after write", json!({ "id": id })))
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO appointments
                (client_name, client_email, client_phone, notes, status, source,
                 service_id, barber_id, slot_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&new_appointment.client_name)
        .bind(&new_appointment.client_email)
        .bind(&new_appointment.client_phone)
        .bind(&new_appointment.notes)
        .bind(new_appointment.status.as_str())
        .bind(&new_appointment.source)
        .bind(&new_appointment.service_id)
        .bind(&new_appointment.barber_id)
        .bind(&new_appointment.slot_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(slot_taken)?;

        self.load(&id).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        let sql = format!("{SELECT_APPOINTMENT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Appointment::try_from).transpose()
    }

    async fn list(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, AppError> {
        let sql = format!(
            "{SELECT_APPOINTMENT} WHERE ($1::text IS NULL OR a.status = $1) ORDER BY t.start_at ASC, a.id ASC"
        );
        let rows = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(status.map(AppointmentStatus::as_str))
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, AppError> {
        let updated: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE appointments
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(slot_taken)?;

        match updated {
            Some(id) => self.load(&id).await.map(Some),
            None => Ok(None),
        }
    }

    async fn count_by_status(&self) -> Result<Vec<(AppointmentStatus, i64)>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*) FROM appointments GROUP BY status ORDER BY status",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|(status, count)| {
                status
                    .parse::<AppointmentStatus>()
                    .map(|s| (s, count))
                    .map_err(|e| AppError::internal(e, json!({})))
            })
            .collect()
    }
}
