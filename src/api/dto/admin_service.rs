//! DTOs for admin service management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::catalog::CategoryRefItem;
use crate::domain::entities::{NewService, Service, ServicePatch};

fn default_true() -> bool {
    true
}

/// `POST /api/admin/services` body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: i32,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_cents: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub category_ids: Vec<String>,
}

impl From<CreateServiceRequest> for NewService {
    fn from(r: CreateServiceRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            duration_minutes: r.duration_minutes,
            price_cents: r.price_cents,
            is_active: r.is_active,
            category_ids: r.category_ids,
        }
    }
}

/// `PATCH /api/admin/services/{id}` body.
///
/// An absent field is left unchanged; `"description": null` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    #[serde(default)]
    pub duration_minutes: Option<i32>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[serde(default)]
    pub price_cents: Option<i32>,

    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde(default)]
    pub category_ids: Option<Vec<String>>,
}

impl From<UpdateServiceRequest> for ServicePatch {
    fn from(r: UpdateServiceRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            duration_minutes: r.duration_minutes,
            price_cents: r.price_cents,
            is_active: r.is_active,
            category_ids: r.category_ids,
        }
    }
}

/// Service as shown in the admin console.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminServiceItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i32,
    pub is_active: bool,
    pub categories: Vec<CategoryRefItem>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for AdminServiceItem {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            duration_minutes: s.duration_minutes,
            price_cents: s.price_cents,
            is_active: s.is_active,
            categories: s.categories.into_iter().map(Into::into).collect(),
            updated_at: s.updated_at,
        }
    }
}
