//! Handlers for admin category management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::admin_category::{
    AdminCategoryItem, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::api::dto::pagination::{ListParams, Paginated};
use crate::api::extract::JsonBody;
use crate::domain::entities::CategoryFilter;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/admin/categories?query=&status=&sort=&page=&pageSize=`
pub async fn list_categories_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Paginated<AdminCategoryItem>>, AppError> {
    let page = params.page_request()?;
    let filter = CategoryFilter {
        query: params.search_text()?,
        status: params.status_filter()?,
        sort: params.category_sort()?,
    };

    let result = state.category_service.search(filter, page).await?;

    Ok(Json(Paginated {
        items: result.items.into_iter().map(Into::into).collect(),
        total: result.total,
        page: page.page,
        page_size: page.page_size,
    }))
}

/// `POST /api/admin/categories`
///
/// A missing slug is derived from the name. A duplicate slug is a 409.
pub async fn create_category_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<AdminCategoryItem>), AppError> {
    payload.validate()?;

    let category = state.category_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// `PATCH /api/admin/categories/{id}`
pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateCategoryRequest>,
) -> Result<Json<AdminCategoryItem>, AppError> {
    payload.validate()?;

    let category = state.category_service.update(&id, payload.into()).await?;

    Ok(Json(category.into()))
}

/// `DELETE /api/admin/categories/{id}`
///
/// Links to services are removed along with the category.
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
