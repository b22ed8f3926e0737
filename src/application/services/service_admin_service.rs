//! Admin management of the service catalog.

use serde_json::json;
use std::sync::Arc;

use super::catalog_service::invalidate_catalog;
use crate::domain::entities::{
    NewService, PageRequest, Paged, Service, ServiceFilter, ServicePatch,
};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Create, update, delete and search services for the admin console.
///
/// Every successful write clears the public catalog cache.
pub struct ServiceAdminService<S: ServiceRepository> {
    repository: Arc<S>,
    cache: Arc<dyn CacheService>,
}

impl<S: ServiceRepository> ServiceAdminService<S> {
    pub fn new(repository: Arc<S>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    pub async fn search(
        &self,
        filter: ServiceFilter,
        page: PageRequest,
    ) -> Result<Paged<Service>, AppError> {
        self.repository.search(filter, page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a category id is unknown.
    pub async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        let service = self.repository.create(new_service).await?;
        invalidate_catalog(self.cache.as_ref()).await;
        tracing::info!(service_id = %service.id, "Service created");
        Ok(service)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the service does not exist.
    pub async fn update(&self, id: &str, patch: ServicePatch) -> Result<Service, AppError> {
        let service = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        invalidate_catalog(self.cache.as_ref()).await;
        Ok(service)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the service does not exist and
    /// [`AppError::Conflict`] while appointments still reference it.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        invalidate_catalog(self.cache.as_ref()).await;
        tracing::info!(service_id = %id, "Service deleted");
        Ok(())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Service not found", json!({ "id": id }))
}
