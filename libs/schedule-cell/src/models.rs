// libs/schedule-cell/src/models.rs
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use shared_models::clinic::{ClinicConfiguration, DayHours};
use shared_models::error::AppError;
use shared_models::wire;

// ==============================================================================
// WEEKLY AVAILABILITY REQUESTS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAvailabilityEntryRequest {
    /// Sunday = 0 .. Saturday = 6.
    pub day_of_week: u8,
    #[serde(with = "wire::time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire::time")]
    pub end_time: NaiveTime,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAvailabilityEntryRequest {
    pub day_of_week: Option<u8>,
    #[serde(default, with = "wire::opt_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_time")]
    pub end_time: Option<NaiveTime>,
    pub is_available: Option<bool>,
}

// ==============================================================================
// SCHEDULE BLOCK REQUESTS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlockRequest {
    #[serde(with = "wire::datetime")]
    pub start_datetime: NaiveDateTime,
    #[serde(with = "wire::datetime")]
    pub end_datetime: NaiveDateTime,
    pub reason: Option<String>,
}

// ==============================================================================
// CLINIC CONFIGURATION WIRE SHAPE
// ==============================================================================

/// Flat admin-form shape of the clinic configuration: per-day
/// `opening_time_*`/`closing_time_*` keys and `0`/`1` booleans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicConfigurationDto {
    pub default_appointment_duration: i32,
    pub time_slot_interval: i32,
    #[serde(with = "wire::bool_as_int")]
    pub allow_online_booking: bool,
    #[serde(with = "wire::bool_as_int")]
    pub require_confirmation: bool,
    pub cancellation_hours: i64,
    #[serde(with = "wire::opt_time")]
    pub opening_time_sunday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_sunday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub opening_time_monday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_monday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub opening_time_tuesday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_tuesday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub opening_time_wednesday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_wednesday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub opening_time_thursday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_thursday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub opening_time_friday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_friday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub opening_time_saturday: Option<NaiveTime>,
    #[serde(with = "wire::opt_time")]
    pub closing_time_saturday: Option<NaiveTime>,
}

impl From<ClinicConfiguration> for ClinicConfigurationDto {
    fn from(config: ClinicConfiguration) -> Self {
        let day = |i: usize| {
            let hours = config.hours[i];
            (
                hours.map(|h| h.opening_time),
                hours.map(|h| h.closing_time),
            )
        };
        let (opening_time_sunday, closing_time_sunday) = day(0);
        let (opening_time_monday, closing_time_monday) = day(1);
        let (opening_time_tuesday, closing_time_tuesday) = day(2);
        let (opening_time_wednesday, closing_time_wednesday) = day(3);
        let (opening_time_thursday, closing_time_thursday) = day(4);
        let (opening_time_friday, closing_time_friday) = day(5);
        let (opening_time_saturday, closing_time_saturday) = day(6);

        Self {
            default_appointment_duration: config.default_appointment_duration,
            time_slot_interval: config.time_slot_interval,
            allow_online_booking: config.allow_online_booking,
            require_confirmation: config.require_confirmation,
            cancellation_hours: config.cancellation_hours,
            opening_time_sunday,
            closing_time_sunday,
            opening_time_monday,
            closing_time_monday,
            opening_time_tuesday,
            closing_time_tuesday,
            opening_time_wednesday,
            closing_time_wednesday,
            opening_time_thursday,
            closing_time_thursday,
            opening_time_friday,
            closing_time_friday,
            opening_time_saturday,
            closing_time_saturday,
        }
    }
}

/// Partial update matching the admin form's "send only changed fields"
/// pattern. Absent day-time keys leave the day unchanged; explicit
/// `null` clears the side (validation then requires the whole day to be
/// cleared or set).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicConfigurationUpdate {
    pub default_appointment_duration: Option<i32>,
    pub time_slot_interval: Option<i32>,
    #[serde(default, with = "wire::opt_bool_as_int")]
    pub allow_online_booking: Option<bool>,
    #[serde(default, with = "wire::opt_bool_as_int")]
    pub require_confirmation: Option<bool>,
    pub cancellation_hours: Option<i64>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_sunday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_sunday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_monday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_monday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_tuesday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_tuesday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_wednesday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_wednesday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_thursday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_thursday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_friday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_friday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub opening_time_saturday: Option<Option<NaiveTime>>,
    #[serde(default, with = "wire::double_opt_time")]
    pub closing_time_saturday: Option<Option<NaiveTime>>,
}

impl ClinicConfigurationUpdate {
    /// Per-day `(opening, closing)` update pairs in day-index order.
    pub fn day_updates(&self) -> [(Option<Option<NaiveTime>>, Option<Option<NaiveTime>>); 7] {
        [
            (self.opening_time_sunday, self.closing_time_sunday),
            (self.opening_time_monday, self.closing_time_monday),
            (self.opening_time_tuesday, self.closing_time_tuesday),
            (self.opening_time_wednesday, self.closing_time_wednesday),
            (self.opening_time_thursday, self.closing_time_thursday),
            (self.opening_time_friday, self.closing_time_friday),
            (self.opening_time_saturday, self.closing_time_saturday),
        ]
    }
}

pub fn merge_day(
    current: Option<DayHours>,
    opening: Option<Option<NaiveTime>>,
    closing: Option<Option<NaiveTime>>,
) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let merged_opening = match opening {
        Some(value) => value,
        None => current.map(|h| h.opening_time),
    };
    let merged_closing = match closing {
        Some(value) => value,
        None => current.map(|h| h.closing_time),
    };
    (merged_opening, merged_closing)
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Availability entry overlaps an existing entry for that day")]
    OverlappingAvailability,

    #[error("Both opening and closing time are required for {0}")]
    IncompleteDayConfiguration(String),
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        let message = err.to_string();
        match err {
            CalendarError::NotFound(_) => AppError::NotFound(message),
            CalendarError::Validation(_)
            | CalendarError::OverlappingAvailability
            | CalendarError::IncompleteDayConfiguration(_) => AppError::ValidationError(message),
        }
    }
}
