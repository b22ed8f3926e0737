//! Service category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::listing::StatusFilter;

/// A grouping of services shown in the booking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Partial update of a category. `description: Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Ordering for the admin category listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySort {
    Name,
    #[default]
    SortOrder,
    UpdatedAt,
}

/// Criteria for the admin category listing.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub query: Option<String>,
    pub status: StatusFilter,
    pub sort: CategorySort,
}
