//! PostgreSQL implementation of the service repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use super::{is_foreign_key_violation, like_pattern};
use crate::domain::entities::{
    CategoryRef, NewService, PageRequest, Paged, Service, ServiceFilter, ServicePatch,
    ServiceSort, ServiceSummary,
};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

const SELECT_SERVICE: &str = r#"
    SELECT
        s.id, s.name, s.description, s.duration_minutes, s.price_cents, s.is_active,
        s.created_at, s.updated_at,
        COALESCE(
            (SELECT jsonb_agg(jsonb_build_object('id', c.id, 'name', c.name)
                              ORDER BY c.sort_order, c.name)
             FROM service_categories sc
             JOIN categories c ON c.id = sc.category_id
             WHERE sc.service_id = s.id),
            '[]'::jsonb
        ) AS categories
    FROM services s
"#;

const SEARCH_WHERE: &str = r#"
    WHERE ($1::text IS NULL OR s.name ILIKE $1 OR s.description ILIKE $1)
      AND ($2::boolean IS NULL OR s.is_active = $2)
      AND ($3::text IS NULL OR EXISTS (
            SELECT 1 FROM service_categories sc
            WHERE sc.service_id = s.id AND sc.category_id = $3))
"#;

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: String,
    name: String,
    description: Option<String>,
    duration_minutes: i32,
    price_cents: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    categories: Json<Vec<CategoryRef>>,
}

impl From<ServiceRow> for Service {
    fn from(r: ServiceRow) -> Self {
        Service {
            id: r.id,
            name: r.name,
            description: r.description,
            duration_minutes: r.duration_minutes,
            price_cents: r.price_cents,
            is_active: r.is_active,
            categories: r.categories.0,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn order_by(sort: ServiceSort) -> &'static str {
    match sort {
        ServiceSort::Name => "s.name ASC, s.id ASC",
        ServiceSort::Price => "s.price_cents ASC, s.name ASC",
        ServiceSort::Duration => "s.duration_minutes ASC, s.name ASC",
        ServiceSort::UpdatedAt => "s.updated_at DESC, s.id ASC",
    }
}

fn unknown_category(e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        AppError::bad_request("Unknown category", json!({ "field": "categoryIds" }))
    } else {
        e.into()
    }
}

/// PostgreSQL repository for services and their category links.
pub struct PgServiceRepository {
    pool: Arc<PgPool>,
}

impl PgServiceRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn replace_categories(
        tx: &mut Transaction<'_, Postgres>,
        service_id: &str,
        category_ids: &[String],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM service_categories WHERE service_id = $1")
            .bind(service_id)
            .execute(&mut **tx)
            .await?;

        if category_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO service_categories (service_id, category_id)
            SELECT DISTINCT $1::text, unnest($2::text[])
            "#,
        )
        .bind(service_id)
        .bind(category_ids)
        .execute(&mut **tx)
        .await
        .map_err(unknown_category)?;

        Ok(())
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn list_active(&self) -> Result<Vec<Service>, AppError> {
        let sql = format!("{SELECT_SERVICE} WHERE s.is_active ORDER BY s.name ASC, s.id ASC");
        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError> {
        let sql = format!("{SELECT_SERVICE} WHERE s.id = $1");
        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Service::from))
    }

    async fn search(
        &self,
        filter: ServiceFilter,
        page: PageRequest,
    ) -> Result<Paged<Service>, AppError> {
        let pattern = filter.query.as_deref().map(like_pattern);
        let active = filter.status.as_active_flag();

        let count_sql = format!("SELECT COUNT(*) FROM services s {SEARCH_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(active)
            .bind(&filter.category_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        let sql = format!(
            "{SELECT_SERVICE} {SEARCH_WHERE} ORDER BY {} LIMIT $4 OFFSET $5",
            order_by(filter.sort)
        );
        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(&pattern)
            .bind(active)
            .bind(&filter.category_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(Paged {
            items: rows.into_iter().map(Service::from).collect(),
            total,
        })
    }

    async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO services (name, description, duration_minutes, price_cents, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new_service.name)
        .bind(&new_service.description)
        .bind(new_service.duration_minutes)
        .bind(new_service.price_cents)
        .bind(new_service.is_active)
        .fetch_one(&mut *tx)
        .await?;

        Self::replace_categories(&mut tx, &id, &new_service.category_ids).await?;
        tx.commit().await?;

        self.find_by_id(&id).await?.ok_or_else(|| {
            AppError::internal("Service vanished after insert", json!({ "id": id }))
        })
    }

    async fn update(&self, id: &str, patch: ServicePatch) -> Result<Option<Service>, AppError> {
        let mut tx = self.pool.begin().await?;

        let (set_description, description) = match patch.description {
            Some(value) => (true, value),
            None => (false, None),
        };

        let updated: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE services SET
                name             = COALESCE($2, name),
                description      = CASE WHEN $3 THEN $4 ELSE description END,
                duration_minutes = COALESCE($5, duration_minutes),
                price_cents      = COALESCE($6, price_cents),
                is_active        = COALESCE($7, is_active),
                updated_at       = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(set_description)
        .bind(&description)
        .bind(patch.duration_minutes)
        .bind(patch.price_cents)
        .bind(patch.is_active)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(category_ids) = &patch.category_ids {
            Self::replace_categories(&mut tx, id, category_ids).await?;
        }
        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict(
                        "Service is referenced by appointments",
                        json!({ "id": id }),
                    )
                } else {
                    e.into()
                }
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_uncategorized(&self) -> Result<Vec<ServiceSummary>, AppError> {
        let rows: Vec<(String, String, i32, i32)> = sqlx::query_as(
            r#"
            SELECT s.id, s.name, s.duration_minutes, s.price_cents
            FROM services s
            WHERE NOT EXISTS (SELECT 1 FROM service_categories sc WHERE sc.service_id = s.id)
            ORDER BY s.name
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, duration_minutes, price_cents)| ServiceSummary {
                id,
                name,
                duration_minutes,
                price_cents,
            })
            .collect())
    }

    async fn add_category(&self, service_id: &str, category_id: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO service_categories (service_id, category_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(service_id)
        .bind(category_id)
        .execute(self.pool.as_ref())
        .await
        .map_err(unknown_category)?;

        Ok(())
    }
}
