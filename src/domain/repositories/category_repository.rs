//! Repository trait for service categories.

use crate::domain::entities::{
    Category, CategoryFilter, CategoryPatch, NewCategory, PageRequest, Paged,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists active categories ordered by sort order, then name.
    async fn list_active(&self) -> Result<Vec<Category>, AppError>;

    async fn search(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<Paged<Category>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the name or slug is taken.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Returns `Ok(None)` if the category does not exist.
    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Option<Category>, AppError>;

    /// Deletes a category and its service links. Returns `Ok(false)` if it
    /// did not exist.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Inserts the category or updates the one with the same slug.
    async fn upsert_by_slug(&self, category: NewCategory) -> Result<Category, AppError>;
}
