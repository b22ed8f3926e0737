//! Bookable service entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::listing::StatusFilter;

/// Minimal category reference embedded in a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// A bookable offering with price, duration and categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i32,
    pub is_active: bool,
    pub categories: Vec<CategoryRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Service fields exposed on a barber profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    pub duration_minutes: i32,
    pub price_cents: i32,
}

/// Input data for creating a new service.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i32,
    pub is_active: bool,
    pub category_ids: Vec<String>,
}

/// Partial update of a service.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
/// `category_ids` replaces the whole category set when present.
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub duration_minutes: Option<i32>,
    pub price_cents: Option<i32>,
    pub is_active: Option<bool>,
    pub category_ids: Option<Vec<String>>,
}

/// Ordering for the admin service listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceSort {
    #[default]
    Name,
    Price,
    Duration,
    UpdatedAt,
}

/// Criteria for the admin service listing.
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    /// Case-insensitive substring of name or description.
    pub query: Option<String>,
    pub status: StatusFilter,
    pub category_id: Option<String>,
    pub sort: ServiceSort,
}
