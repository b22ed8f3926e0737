//! Repository trait for barbershop services.

use crate::domain::entities::{
    NewService, PageRequest, Paged, Service, ServiceFilter, ServicePatch, ServiceSummary,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the service catalog.
///
/// Every returned [`Service`] carries its categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgServiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Lists active services ordered by name.
    async fn list_active(&self) -> Result<Vec<Service>, AppError>;

    /// Finds a service by id regardless of its active flag.
    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError>;

    /// Filtered, sorted and paginated listing for the admin console.
    async fn search(
        &self,
        filter: ServiceFilter,
        page: PageRequest,
    ) -> Result<Paged<Service>, AppError>;

    /// Creates a service and links it to the given categories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a category id does not exist.
    async fn create(&self, new_service: NewService) -> Result<Service, AppError>;

    /// Applies a partial update. `category_ids`, when present, replaces the
    /// whole category set.
    ///
    /// Returns `Ok(None)` if the service does not exist.
    async fn update(&self, id: &str, patch: ServicePatch) -> Result<Option<Service>, AppError>;

    /// Deletes a service. Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when appointments still reference it.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Services that belong to no category.
    async fn list_uncategorized(&self) -> Result<Vec<ServiceSummary>, AppError>;

    /// Links a service to a category; an existing link is left untouched.
    async fn add_category(&self, service_id: &str, category_id: &str) -> Result<(), AppError>;
}
