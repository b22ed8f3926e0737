//! Handlers for admin service management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::admin_service::{
    AdminServiceItem, CreateServiceRequest, UpdateServiceRequest,
};
use crate::api::dto::pagination::{ListParams, Paginated};
use crate::api::extract::JsonBody;
use crate::domain::entities::ServiceFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Searches services with filters, sorting and paging.
///
/// # Endpoint
///
/// `GET /api/admin/services?query=&status=&sort=&page=&pageSize=&category=`
pub async fn list_services_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Paginated<AdminServiceItem>>, AppError> {
    let page = params.page_request()?;
    let filter = ServiceFilter {
        query: params.search_text()?,
        status: params.status_filter()?,
        category_id: params.category_id(),
        sort: params.service_sort()?,
    };

    let result = state.service_admin_service.search(filter, page).await?;

    Ok(Json(Paginated {
        items: result.items.into_iter().map(Into::into).collect(),
        total: result.total,
        page: page.page,
        page_size: page.page_size,
    }))
}

/// Creates a service.
///
/// # Endpoint
///
/// `POST /api/admin/services`
///
/// # Errors
///
/// Returns 400 on an invalid payload or an unknown category id.
pub async fn create_service_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateServiceRequest>,
) -> Result<(StatusCode, Json<AdminServiceItem>), AppError> {
    payload.validate()?;

    let service = state.service_admin_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(service.into())))
}

/// Partially updates a service.
///
/// # Endpoint
///
/// `PATCH /api/admin/services/{id}`
///
/// `description: null` clears the description; `categoryIds` replaces the set.
pub async fn update_service_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateServiceRequest>,
) -> Result<Json<AdminServiceItem>, AppError> {
    payload.validate()?;

    let service = state
        .service_admin_service
        .update(&id, payload.into())
        .await?;

    Ok(Json(service.into()))
}

/// Deletes a service.
///
/// # Endpoint
///
/// `DELETE /api/admin/services/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown id and 409 while appointments reference it.
pub async fn delete_service_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.service_admin_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
