//! Admin management of categories and the default category seed.

use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use super::catalog_service::invalidate_catalog;
use crate::domain::entities::{
    Category, CategoryFilter, CategoryPatch, NewCategory, PageRequest, Paged,
};
use crate::domain::repositories::{CategoryRepository, ServiceRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::slug::{DEFAULT_CATEGORIES, default_slug, infer_category, slugify};

/// Outcome of [`CategoryService::seed_defaults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub backfilled: usize,
}

pub struct CategoryService<C: CategoryRepository, S: ServiceRepository> {
    categories: Arc<C>,
    services: Arc<S>,
    cache: Arc<dyn CacheService>,
}

impl<C: CategoryRepository, S: ServiceRepository> CategoryService<C, S> {
    pub fn new(categories: Arc<C>, services: Arc<S>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            categories,
            services,
            cache,
        }
    }

    pub async fn search(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<Paged<Category>, AppError> {
        self.categories.search(filter, page).await
    }

    /// Creates a category. An empty slug is derived from the name.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if no non-blank slug can be derived
    /// - [`AppError::Conflict`] "Category already exists" on a duplicate slug
    pub async fn create(&self, mut new_category: NewCategory) -> Result<Category, AppError> {
        if new_category.slug.trim().is_empty() {
            new_category.slug = default_slug(&new_category.name);
        }
        if new_category.slug.is_empty() {
            return Err(AppError::bad_request(
                "Slug must be 1-120 characters",
                json!({ "field": "slug" }),
            ));
        }

        let category = self.categories.create(new_category).await?;
        invalidate_catalog(self.cache.as_ref()).await;
        Ok(category)
    }

    pub async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category, AppError> {
        let category = self
            .categories
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        invalidate_catalog(self.cache.as_ref()).await;
        Ok(category)
    }

    /// Deletes a category; its service links go with it.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.categories.delete(id).await? {
            return Err(not_found(id));
        }

        invalidate_catalog(self.cache.as_ref()).await;
        Ok(())
    }

    /// Upserts the default categories and assigns every uncategorized
    /// service to one of them by keyword.
    pub async fn seed_defaults(&self) -> Result<SeedReport, AppError> {
        let mut ids_by_name = HashMap::new();

        for (name, sort_order) in DEFAULT_CATEGORIES {
            let category = self
                .categories
                .upsert_by_slug(NewCategory {
                    name: name.to_string(),
                    slug: slugify(name),
                    description: None,
                    sort_order,
                    is_active: true,
                })
                .await?;
            ids_by_name.insert(name, category.id);
        }

        let uncategorized = self.services.list_uncategorized().await?;
        let mut backfilled = 0;

        for service in &uncategorized {
            let target = infer_category(&service.name);
            let Some(category_id) = ids_by_name.get(target) else {
                continue;
            };

            self.services.add_category(&service.id, category_id).await?;
            tracing::debug!(service = %service.name, category = target, "Service categorized");
            backfilled += 1;
        }

        invalidate_catalog(self.cache.as_ref()).await;

        Ok(SeedReport {
            categories: ids_by_name.len(),
            backfilled,
        })
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Category not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceSummary;
    use crate::domain::repositories::{MockCategoryRepository, MockServiceRepository};
    use crate::infrastructure::cache::NullCache;
    use chrono::Utc;

    fn category_from(new: NewCategory) -> Category {
        Category {
            id: format!("cat-{}", new.slug),
            name: new.name,
            slug: new.slug,
            description: new.description,
            sort_order: new.sort_order,
            is_active: new.is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service_under_test(
        categories: MockCategoryRepository,
        services: MockServiceRepository,
    ) -> CategoryService<MockCategoryRepository, MockServiceRepository> {
        CategoryService::new(
            Arc::new(categories),
            Arc::new(services),
            Arc::new(NullCache::new()),
        )
    }

    #[tokio::test]
    async fn test_create_derives_missing_slug() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_create()
            .withf(|new| new.slug == "beard-care")
            .times(1)
            .returning(|new| Ok(category_from(new)));

        let service = service_under_test(categories, MockServiceRepository::new());

        let created = service
            .create(NewCategory {
                name: "Beard  Care".to_string(),
                slug: String::new(),
                description: None,
                sort_order: 0,
                is_active: true,
            })
            .await
            .unwrap();

        assert_eq!(created.slug, "beard-care");
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_slug() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_create()
            .withf(|new| new.slug == "beards")
            .times(1)
            .returning(|new| Ok(category_from(new)));

        let service = service_under_test(categories, MockServiceRepository::new());

        let created = service
            .create(NewCategory {
                name: "Beard Care".to_string(),
                slug: "beards".to_string(),
                description: None,
                sort_order: 1,
                is_active: true,
            })
            .await
            .unwrap();

        assert_eq!(created.slug, "beards");
    }

    #[tokio::test]
    async fn test_create_blank_name_without_slug_is_rejected() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_create().never();

        let service = service_under_test(categories, MockServiceRepository::new());

        let result = service
            .create(NewCategory {
                name: "   ".to_string(),
                slug: String::new(),
                description: None,
                sort_order: 0,
                is_active: true,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_update().returning(|_, _| Ok(None));

        let service = service_under_test(categories, MockServiceRepository::new());

        assert!(matches!(
            service.update("missing", CategoryPatch::default()).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_seed_defaults_backfills_by_keyword() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_upsert_by_slug()
            .times(5)
            .returning(|new| Ok(category_from(new)));

        let mut services = MockServiceRepository::new();
        services.expect_list_uncategorized().times(1).returning(|| {
            Ok(vec![
                ServiceSummary {
                    id: "svc-1".to_string(),
                    name: "Skin Fade".to_string(),
                    duration_minutes: 40,
                    price_cents: 3500,
                },
                ServiceSummary {
                    id: "svc-2".to_string(),
                    name: "Scalp Massage".to_string(),
                    duration_minutes: 20,
                    price_cents: 1500,
                },
            ])
        });
        services
            .expect_add_category()
            .withf(|service_id, category_id| service_id == "svc-1" && category_id == "cat-haircuts")
            .times(1)
            .returning(|_, _| Ok(()));
        services
            .expect_add_category()
            .withf(|service_id, category_id| {
                service_id == "svc-2" && category_id == "cat-other-services"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service_under_test(categories, services);

        let report = service.seed_defaults().await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                categories: 5,
                backfilled: 2
            }
        );
    }
}
