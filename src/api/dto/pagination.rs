//! Listing query parameters shared by the admin endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{CategorySort, PageRequest, ServiceSort, StatusFilter};
use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const MAX_QUERY_LEN: usize = 120;

/// Query string of the admin list endpoints.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub sort: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde(default)]
    pub category: Option<String>,
}

impl ListParams {
    /// Validates `page` and `pageSize`.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `pageSize`: 12, at most 100
    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "field": "page" }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "field": "pageSize" }),
            ));
        }

        Ok(PageRequest { page, page_size })
    }

    /// The trimmed search text, `None` when blank.
    pub fn search_text(&self) -> Result<Option<String>, AppError> {
        let Some(query) = self.query.as_deref().map(str::trim) else {
            return Ok(None);
        };

        if query.chars().count() > MAX_QUERY_LEN {
            return Err(AppError::bad_request(
                format!("Query must be at most {MAX_QUERY_LEN} characters"),
                json!({ "field": "query" }),
            ));
        }

        Ok((!query.is_empty()).then(|| query.to_string()))
    }

    pub fn status_filter(&self) -> Result<StatusFilter, AppError> {
        match self.status.as_deref() {
            None | Some("all") => Ok(StatusFilter::All),
            Some("active") => Ok(StatusFilter::Active),
            Some("inactive") => Ok(StatusFilter::Inactive),
            Some(other) => Err(invalid_choice("status", other)),
        }
    }

    pub fn service_sort(&self) -> Result<ServiceSort, AppError> {
        match self.sort.as_deref() {
            None | Some("name") => Ok(ServiceSort::Name),
            Some("price") => Ok(ServiceSort::Price),
            Some("duration") => Ok(ServiceSort::Duration),
            Some("updatedAt") => Ok(ServiceSort::UpdatedAt),
            Some(other) => Err(invalid_choice("sort", other)),
        }
    }

    pub fn category_sort(&self) -> Result<CategorySort, AppError> {
        match self.sort.as_deref() {
            None | Some("sortOrder") => Ok(CategorySort::SortOrder),
            Some("name") => Ok(CategorySort::Name),
            Some("updatedAt") => Ok(CategorySort::UpdatedAt),
            Some(other) => Err(invalid_choice("sort", other)),
        }
    }

    pub fn category_id(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }
}

fn invalid_choice(field: &str, value: &str) -> AppError {
    AppError::bad_request(
        format!("Invalid {field}"),
        json!({ "field": field, "value": value }),
    )
}

/// A page of results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}
