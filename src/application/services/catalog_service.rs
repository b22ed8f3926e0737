//! Public catalog reads with fail-open caching.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;

use crate::domain::entities::{Barber, Category, Service};
use crate::domain::repositories::{BarberRepository, CategoryRepository, ServiceRepository};
use crate::error::AppError;
use crate::infrastructure::cache::{CacheService, keys};

/// Drops every cached catalog list.
///
/// Service lists embed category names and barber lists embed service names,
/// so any catalog write clears all three entries.
pub async fn invalidate_catalog(cache: &dyn CacheService) {
    for key in [keys::SERVICES, keys::CATEGORIES, keys::BARBERS] {
        if let Err(e) = cache.invalidate(key).await {
            tracing::warn!(key, error = %e, "Failed to invalidate catalog cache");
        }
    }
}

/// Read-only catalog for the booking flow.
///
/// The unfiltered lists are served from the cache when present.
pub struct CatalogService<S: ServiceRepository, C: CategoryRepository, B: BarberRepository> {
    services: Arc<S>,
    categories: Arc<C>,
    barbers: Arc<B>,
    cache: Arc<dyn CacheService>,
}

impl<S, C, B> CatalogService<S, C, B>
where
    S: ServiceRepository,
    C: CategoryRepository,
    B: BarberRepository,
{
    pub fn new(
        services: Arc<S>,
        categories: Arc<C>,
        barbers: Arc<B>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            services,
            categories,
            barbers,
            cache,
        }
    }

    /// Active services sorted by name.
    pub async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        self.cached(keys::SERVICES, || self.services.list_active())
            .await
    }

    /// Active categories sorted by sort order, then name.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.cached(keys::CATEGORIES, || self.categories.list_active())
            .await
    }

    /// Barbers sorted by name, optionally only those offering `service_id`.
    pub async fn list_barbers(&self, service_id: Option<String>) -> Result<Vec<Barber>, AppError> {
        match service_id {
            Some(id) => self.barbers.list(Some(id)).await,
            None => self.cached(keys::BARBERS, || self.barbers.list(None)).await,
        }
    }

    async fn cached<T, F, Fut>(&self, key: &'static str, load: F) -> Result<Vec<T>, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, AppError>>,
    {
        if let Ok(Some(raw)) = self.cache.get(key).await {
            match serde_json::from_str(&raw) {
                Ok(items) => return Ok(items),
                Err(e) => tracing::warn!(key, error = %e, "Discarding unreadable cache entry"),
            }
        }

        let items = load().await?;

        match serde_json::to_string(&items) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(key, &raw, None).await {
                    tracing::warn!(key, error = %e, "Failed to populate catalog cache");
                }
            }
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize catalog list"),
        }

        Ok(items)
    }
}
