//! DTOs for the availability endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::{AvailabilityFilter, AvailableDay};
use crate::domain::entities::AvailableSlot;
use crate::error::AppError;

pub const DEFAULT_NEXT_LIMIT: usize = 3;
pub const MAX_NEXT_LIMIT: usize = 10;
pub const DEFAULT_HORIZON_DAYS: u32 = 21;
pub const MAX_HORIZON_DAYS: u32 = 60;

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `GET /api/availability` query string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub barber_id: Option<String>,
}

impl AvailabilityQuery {
    pub fn filter(&self) -> AvailabilityFilter {
        AvailabilityFilter {
            service_id: non_blank(&self.service_id),
            barber_id: non_blank(&self.barber_id),
        }
    }
}

/// `GET /api/availability/next` query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAvailabilityQuery {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub barber_id: Option<String>,
    #[serde(default)]
    pub from: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub horizon_days: Option<u32>,
}

impl NextAvailabilityQuery {
    pub fn filter(&self) -> AvailabilityFilter {
        AvailabilityFilter {
            service_id: non_blank(&self.service_id),
            barber_id: non_blank(&self.barber_id),
        }
    }

    /// `limit` in 1..=10, default 3.
    pub fn limit(&self) -> Result<usize, AppError> {
        let limit = self.limit.unwrap_or(DEFAULT_NEXT_LIMIT);
        if !(1..=MAX_NEXT_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                format!("limit must be between 1 and {MAX_NEXT_LIMIT}"),
                json!({ "field": "limit" }),
            ));
        }
        Ok(limit)
    }

    /// `horizonDays` in 1..=60, default 21.
    pub fn horizon_days(&self) -> Result<u32, AppError> {
        let days = self.horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS);
        if !(1..=MAX_HORIZON_DAYS).contains(&days) {
            return Err(AppError::bad_request(
                format!("horizonDays must be between 1 and {MAX_HORIZON_DAYS}"),
                json!({ "field": "horizonDays" }),
            ));
        }
        Ok(days)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotItem {
    pub slot_id: String,
    pub barber_id: Option<String>,
    pub barber_name: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<AvailableSlot> for SlotItem {
    fn from(s: AvailableSlot) -> Self {
        Self {
            slot_id: s.slot_id,
            barber_id: s.barber_id,
            barber_name: s.barber_name,
            start: s.start,
            end: s.end,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AvailableDayItem {
    pub date: NaiveDate,
    pub slots: Vec<SlotItem>,
}

impl From<AvailableDay> for AvailableDayItem {
    fn from(d: AvailableDay) -> Self {
        Self {
            date: d.date,
            slots: d.slots.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_defaults() {
        let q = NextAvailabilityQuery::default();
        assert_eq!(q.limit().unwrap(), 3);
        assert_eq!(q.horizon_days().unwrap(), 21);
    }

    #[test]
    fn test_next_bounds() {
        let q = NextAvailabilityQuery {
            limit: Some(11),
            horizon_days: Some(61),
            ..Default::default()
        };
        assert!(q.limit().is_err());
        assert!(q.horizon_days().is_err());

        let zero = NextAvailabilityQuery {
            limit: Some(0),
            horizon_days: Some(0),
            ..Default::default()
        };
        assert!(zero.limit().is_err());
        assert!(zero.horizon_days().is_err());
    }

    #[test]
    fn test_blank_ids_are_ignored() {
        let q = AvailabilityQuery {
            date: Some("2025-09-25".to_string()),
            service_id: Some("  ".to_string()),
            barber_id: Some("b1".to_string()),
        };
        let filter = q.filter();
        assert!(filter.service_id.is_none());
        assert_eq!(filter.barber_id.as_deref(), Some("b1"));
    }

    #[test]
    fn test_slot_item_serializes_rfc3339_utc() {
        use chrono::TimeZone;

        let item = SlotItem {
            slot_id: "s1".to_string(),
            barber_id: None,
            barber_name: None,
            start: Utc.with_ymd_and_hms(2025, 9, 25, 16, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 9, 25, 16, 45, 0).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["slotId"], "s1");
        assert_eq!(json["start"], "2025-09-25T16:00:00Z");
        assert!(json["barberId"].is_null());
    }
}
