use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire;

/// One row of a professional's recurring weekly template. Multiple
/// entries per day model split shifts; entries for the same day must not
/// overlap (enforced at write time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub id: Uuid,
    pub professional_id: Uuid,
    /// Sunday = 0 .. Saturday = 6.
    pub day_of_week: u8,
    #[serde(with = "wire::time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire::time")]
    pub end_time: NaiveTime,
    pub is_available: bool,
}

/// Absolute-time unavailability override (vacation, leave). Blocks may
/// stack and are never auto-expired; callers filter by date at query
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub id: Uuid,
    pub professional_id: Uuid,
    #[serde(with = "wire::datetime")]
    pub start_datetime: NaiveDateTime,
    #[serde(with = "wire::datetime")]
    pub end_datetime: NaiveDateTime,
    pub reason: Option<String>,
    #[serde(with = "wire::datetime")]
    pub created_at: NaiveDateTime,
}
