//! PostgreSQL implementation of the barber repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{Barber, ServiceSummary};
use crate::domain::repositories::BarberRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BarberRow {
    id: String,
    name: String,
    bio: Option<String>,
    photo_url: Option<String>,
    services: Json<Vec<ServiceSummary>>,
}

pub struct PgBarberRepository {
    pool: Arc<PgPool>,
}

impl PgBarberRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BarberRepository for PgBarberRepository {
    async fn list(&self, service_id: Option<String>) -> Result<Vec<Barber>, AppError> {
        let rows = sqlx::query_as::<_, BarberRow>(
            r#"
            SELECT
                b.id, b.name, b.bio, b.photo_url,
                COALESCE(
                    (SELECT jsonb_agg(jsonb_build_object(
                                'id', s.id,
                                'name', s.name,
                                'duration_minutes', s.duration_minutes,
                                'price_cents', s.price_cents)
                            ORDER BY s.name)
                     FROM barber_services bs
                     JOIN services s ON s.id = bs.service_id
                     WHERE bs.barber_id = b.id),
                    '[]'::jsonb
                ) AS services
            FROM barbers b
            WHERE ($1::text IS NULL OR EXISTS (
                    SELECT 1 FROM barber_services bs
                    WHERE bs.barber_id = b.id AND bs.service_id = $1))
            ORDER BY b.name ASC, b.id ASC
            "#,
        )
        .bind(service_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Barber {
                id: r.id,
                name: r.name,
                bio: r.bio,
                photo_url: r.photo_url,
                services: r.services.0,
            })
            .collect())
    }
}
