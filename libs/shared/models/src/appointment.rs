use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::wire;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub pet_id: Uuid,
    pub professional_id: Uuid,
    pub specialty_id: Option<Uuid>,
    pub appointment_date: NaiveDate,
    #[serde(with = "wire::time")]
    pub appointment_time: NaiveTime,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    #[serde(with = "wire::datetime")]
    pub created_at: NaiveDateTime,
    #[serde(with = "wire::datetime")]
    pub updated_at: NaiveDateTime,
}

impl Appointment {
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }

    pub fn end_datetime(&self) -> NaiveDateTime {
        self.start_datetime() + chrono::Duration::minutes(self.duration_minutes as i64)
    }

    /// Whether this appointment still occupies its interval on the
    /// professional's calendar.
    pub fn occupies_calendar(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}
