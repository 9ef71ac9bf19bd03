use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::wire;

/// Opening and closing hours for one weekday. A day without hours is
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(with = "wire::time")]
    pub opening_time: NaiveTime,
    #[serde(with = "wire::time")]
    pub closing_time: NaiveTime,
}

/// Per-tenant scheduling parameters and weekly operating hours.
///
/// The weekly hours are a fixed seven-element mapping indexed by
/// `day_index` (Sunday = 0 .. Saturday = 6) rather than a dynamically
/// keyed structure, so weekday handling is exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicConfiguration {
    pub default_appointment_duration: i32,
    pub time_slot_interval: i32,
    #[serde(with = "wire::bool_as_int")]
    pub allow_online_booking: bool,
    #[serde(with = "wire::bool_as_int")]
    pub require_confirmation: bool,
    pub cancellation_hours: i64,
    pub hours: [Option<DayHours>; 7],
}

pub const MIN_APPOINTMENT_MINUTES: i32 = 15;
pub const MAX_APPOINTMENT_MINUTES: i32 = 240;
/// Appointment durations must land on this granularity.
pub const APPOINTMENT_STEP_MINUTES: i32 = 5;

/// Sunday = 0 .. Saturday = 6.
pub fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

pub const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

impl ClinicConfiguration {
    pub fn hours_for(&self, weekday: Weekday) -> Option<DayHours> {
        self.hours[day_index(weekday)]
    }

    pub fn is_open_on(&self, weekday: Weekday) -> bool {
        self.hours_for(weekday).is_some()
    }
}

impl Default for ClinicConfiguration {
    fn default() -> Self {
        let weekday_hours = DayHours {
            opening_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        };
        let saturday_hours = DayHours {
            opening_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        };

        Self {
            default_appointment_duration: 30,
            time_slot_interval: 15,
            allow_online_booking: true,
            require_confirmation: false,
            cancellation_hours: 24,
            hours: [
                None,
                Some(weekday_hours),
                Some(weekday_hours),
                Some(weekday_hours),
                Some(weekday_hours),
                Some(weekday_hours),
                Some(saturday_hours),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_index_follows_sunday_first_convention() {
        assert_eq!(day_index(Weekday::Sun), 0);
        assert_eq!(day_index(Weekday::Mon), 1);
        assert_eq!(day_index(Weekday::Sat), 6);
    }

    #[test]
    fn default_configuration_is_closed_on_sunday() {
        let config = ClinicConfiguration::default();
        assert!(!config.is_open_on(Weekday::Sun));
        assert!(config.is_open_on(Weekday::Mon));
    }
}
