//! Handlers for slot availability.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::availability::{
    AvailabilityQuery, AvailableDayItem, NextAvailabilityQuery, SlotItem,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::day_bounds::{parse_date, today_utc};

/// Free slots for one UTC day.
///
/// # Endpoint
///
/// `GET /api/availability?date=YYYY-MM-DD&serviceId=&barberId=`
///
/// # Errors
///
/// Returns 400 if `date` is missing or not a calendar date.
pub async fn availability_handler(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<SlotItem>>, AppError> {
    let raw_date = query
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::bad_request("date is required", json!({ "field": "date" })))?;
    let date = parse_date(raw_date)?;

    let slots = state
        .availability_service
        .for_day(date, query.filter())
        .await?;

    Ok(Json(slots.into_iter().map(Into::into).collect()))
}

/// The next days that still have free slots.
///
/// # Endpoint
///
/// `GET /api/availability/next?serviceId=&barberId=&from=&limit=&horizonDays=`
///
/// `from` defaults to today (UTC).
pub async fn next_availability_handler(
    State(state): State<AppState>,
    Query(query): Query<NextAvailabilityQuery>,
) -> Result<Json<Vec<AvailableDayItem>>, AppError> {
    let from = match query.from.as_deref().filter(|d| !d.is_empty()) {
        Some(raw) => parse_date(raw)?,
        None => today_utc(),
    };
    let limit = query.limit()?;
    let horizon_days = query.horizon_days()?;

    let days = state
        .availability_service
        .next_days(from, horizon_days, limit, query.filter())
        .await?;

    Ok(Json(days.into_iter().map(Into::into).collect()))
}
