//! Handlers for booking and admin appointment management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::appointment::{
    AppointmentResponse, AppointmentsQuery, CreateAppointmentRequest, UpdateStatusRequest,
    parse_status,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Books a slot for a client.
///
/// # Endpoint
///
/// `POST /api/appointments`
///
/// # Errors
///
/// - 400 if the payload is invalid
/// - 404 if the service is missing or inactive, or the slot is unavailable
/// - 409 if the slot already has an active booking
pub async fn create_appointment_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    payload.validate()?;

    let appointment = state.booking_service.book(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(appointment.into())))
}

/// Returns one appointment for the confirmation page.
///
/// # Endpoint
///
/// `GET /api/appointments/{id}`
pub async fn get_appointment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.booking_service.get(&id).await?;
    Ok(Json(appointment.into()))
}

/// Lists appointments by slot start, optionally filtered by status.
///
/// # Endpoint
///
/// `GET /api/appointments?status=` (admin)
pub async fn list_appointments_handler(
    State(state): State<AppState>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state.booking_service.list(query.status()?).await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

/// Sets an appointment's status.
///
/// # Endpoint
///
/// `PATCH /api/appointments/{id}/status` (admin)
///
/// Any status may follow any other.
///
/// # Errors
///
/// - 400 for an unknown status
/// - 404 for an unknown appointment
/// - 409 when reactivating onto a slot that was booked again
pub async fn update_appointment_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateStatusRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let status = parse_status(&payload.status)?;
    let appointment = state.booking_service.update_status(&id, status).await?;
    Ok(Json(appointment.into()))
}
