//! PostgreSQL implementation of the category repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::{is_unique_violation, like_pattern};
use crate::domain::entities::{
    Category, CategoryFilter, CategoryPatch, CategorySort, NewCategory, PageRequest, Paged,
};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

const CATEGORY_COLUMNS: &str =
    "id, name, slug, description, sort_order, is_active, created_at, updated_at";

const SEARCH_WHERE: &str = r#"
    WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
      AND ($2::boolean IS NULL OR is_active = $2)
"#;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    slug: String,
    description: Option<String>,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category {
            id: r.id,
            name: r.name,
            slug: r.slug,
            description: r.description,
            sort_order: r.sort_order,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn order_by(sort: CategorySort) -> &'static str {
    match sort {
        CategorySort::Name => "name ASC, id ASC",
        CategorySort::SortOrder => "sort_order ASC, name ASC",
        CategorySort::UpdatedAt => "updated_at DESC, id ASC",
    }
}

fn duplicate_category(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        AppError::conflict("Category already exists", json!({ "field": "slug" }))
    } else {
        e.into()
    }
}

/// PostgreSQL repository for categories.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_active(&self) -> Result<Vec<Category>, AppError> {
        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE is_active ORDER BY sort_order ASC, name ASC"
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn search(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<Paged<Category>, AppError> {
        let pattern = filter.query.as_deref().map(like_pattern);
        let active = filter.status.as_active_flag();

        let count_sql = format!("SELECT COUNT(*) FROM categories {SEARCH_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(active)
            .fetch_one(self.pool.as_ref())
            .await?;

        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories {SEARCH_WHERE} ORDER BY {} LIMIT $3 OFFSET $4",
            order_by(filter.sort)
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(&pattern)
            .bind(active)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(Paged {
            items: rows.into_iter().map(Category::from).collect(),
            total,
        })
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let sql = format!(
            r#"
            INSERT INTO categories (name, slug, description, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(&new_category.name)
            .bind(&new_category.slug)
            .bind(&new_category.description)
            .bind(new_category.sort_order)
            .bind(new_category.is_active)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(duplicate_category)?;

        Ok(row.into())
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Option<Category>, AppError> {
        let (set_description, description) = match patch.description {
            Some(value) => (true, value),
            None => (false, None),
        };

        let sql = format!(
            r#"
            UPDATE categories SET
                name        = COALESCE($2, name),
                slug        = COALESCE($3, slug),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                sort_order  = COALESCE($6, sort_order),
                is_active   = COALESCE($7, is_active),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.slug)
            .bind(set_description)
            .bind(&description)
            .bind(patch.sort_order)
            .bind(patch.is_active)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(duplicate_category)?;

        Ok(row.map(Category::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn upsert_by_slug(&self, category: NewCategory) -> Result<Category, AppError> {
        let sql = format!(
            r#"
            INSERT INTO categories (name, slug, description, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (slug) DO UPDATE SET
                name       = EXCLUDED.name,
                sort_order = EXCLUDED.sort_order,
                updated_at = NOW()
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(&category.name)
            .bind(&category.slug)
            .bind(&category.description)
            .bind(category.sort_order)
            .bind(category.is_active)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }
}
