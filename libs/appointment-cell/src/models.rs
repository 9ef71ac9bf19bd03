// libs/appointment-cell/src/models.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::clinic::{
    APPOINTMENT_STEP_MINUTES, MAX_APPOINTMENT_MINUTES, MIN_APPOINTMENT_MINUTES,
};
use shared_models::error::AppError;
use shared_models::wire;

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub client_id: Uuid,
    pub pet_id: Uuid,
    pub professional_id: Uuid,
    pub specialty_id: Option<Uuid>,
    pub appointment_date: NaiveDate,
    #[serde(with = "wire::time")]
    pub appointment_time: NaiveTime,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAppointmentRequest {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: shared_models::appointment::AppointmentStatus,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct DayScheduleQuery {
    pub date: NaiveDate,
}

/// An ephemeral bookable interval. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(with = "wire::time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire::time")]
    pub end_time: NaiveTime,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid appointment duration: {0} minutes")]
    InvalidDuration(i32),

    #[error("Appointment time is in the past")]
    PastDateTime,

    #[error("Clinic is closed at the requested time")]
    ClinicClosed,

    #[error("Professional is not available at the requested time")]
    ProfessionalUnavailable,

    #[error("Requested slot conflicts with an existing appointment or block")]
    SlotConflict,

    #[error("Cancellation window has expired")]
    CancellationWindowExpired,
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::NotFound(_) => AppError::NotFound(message),
            BookingError::SlotConflict => AppError::Conflict(message),
            BookingError::Validation(_) | BookingError::InvalidDuration(_) => {
                AppError::ValidationError(message)
            }
            BookingError::PastDateTime
            | BookingError::ClinicClosed
            | BookingError::ProfessionalUnavailable
            | BookingError::CancellationWindowExpired => AppError::BadRequest(message),
        }
    }
}

/// Duration policy shared by slot computation and booking: within
/// [15,240] minutes and a multiple of five.
pub fn validate_duration(minutes: i32) -> Result<(), BookingError> {
    if !(MIN_APPOINTMENT_MINUTES..=MAX_APPOINTMENT_MINUTES).contains(&minutes)
        || minutes % APPOINTMENT_STEP_MINUTES != 0
    {
        return Err(BookingError::InvalidDuration(minutes));
    }
    Ok(())
}
