//! Handlers for the public catalog endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::catalog::{BarberItem, BarbersQuery, CategoryItem, ServiceItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists active services by name.
///
/// # Endpoint
///
/// `GET /api/services`
pub async fn list_services_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceItem>>, AppError> {
    let services = state.catalog_service.list_services().await?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

/// Lists active categories by sort order, then name.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryItem>>, AppError> {
    let categories = state.catalog_service.list_categories().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Lists barbers by name, optionally only those offering `serviceId`.
///
/// # Endpoint
///
/// `GET /api/barbers?serviceId=`
pub async fn list_barbers_handler(
    State(state): State<AppState>,
    Query(query): Query<BarbersQuery>,
) -> Result<Json<Vec<BarberItem>>, AppError> {
    let service_id = query.service_id.filter(|id| !id.trim().is_empty());
    let barbers = state.catalog_service.list_barbers(service_id).await?;
    Ok(Json(barbers.into_iter().map(Into::into).collect()))
}
