//! PostgreSQL implementation of the slot repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{SlotCandidate, TimeSlot};
use crate::domain::repositories::SlotRepository;
use crate::error::AppError;

const SELECT_CANDIDATE: &str = r#"
    SELECT
        t.id, t.barber_id, t.start_at, t.end_at, t.is_blocked,
        b.name AS barber_name,
        ARRAY(SELECT bs.service_id FROM barber_services bs
              WHERE bs.barber_id = t.barber_id) AS barber_service_ids,
        EXISTS (SELECT 1 FROM appointments a
                WHERE a.slot_id = t.id AND a.status <> 'CANCELLED') AS has_active_booking
    FROM time_slots t
    LEFT JOIN barbers b ON b.id = t.barber_id
"#;

#[derive(sqlx::FromRow)]
struct CandidateRow {
    id: String,
    barber_id: Option<String>,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    is_blocked: bool,
    barber_name: Option<String>,
    barber_service_ids: Vec<String>,
    has_active_booking: bool,
}

impl From<CandidateRow> for SlotCandidate {
    fn from(r: CandidateRow) -> Self {
        SlotCandidate {
            slot: TimeSlot {
                id: r.id,
                barber_id: r.barber_id,
                start: r.start_at,
                end: r.end_at,
                is_blocked: r.is_blocked,
            },
            barber_name: r.barber_name,
            barber_service_ids: r.barber_service_ids,
            has_active_booking: r.has_active_booking,
        }
    }
}

pub struct PgSlotRepository {
    pool: Arc<PgPool>,
}

impl PgSlotRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    async fn find_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        barber_id: Option<String>,
    ) -> Result<Vec<SlotCandidate>, AppError> {
        let sql = format!(
            r#"{SELECT_CANDIDATE}
            WHERE t.start_at >= $1
              AND t.start_at < $2
              AND NOT t.is_blocked
              AND ($3::text IS NULL OR t.barber_id = $3)
            ORDER BY t.start_at ASC, t.id ASC
            "#
        );
        let rows = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(from)
            .bind(to)
            .bind(barber_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(SlotCandidate::from).collect())
    }

    async fn find_for_booking(&self, slot_id: &str) -> Result<Option<SlotCandidate>, AppError> {
        let sql = format!("{SELECT_CANDIDATE} WHERE t.id = $1");
        let row = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(slot_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(SlotCandidate::from))
    }
}
