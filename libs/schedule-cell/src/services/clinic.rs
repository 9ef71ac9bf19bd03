// libs/schedule-cell/src/services/clinic.rs
use std::sync::Arc;
use tracing::{debug, info};

use shared_models::clinic::{
    ClinicConfiguration, DayHours, APPOINTMENT_STEP_MINUTES, DAY_NAMES, MAX_APPOINTMENT_MINUTES,
    MIN_APPOINTMENT_MINUTES,
};
use shared_store::ClinicStore;

use crate::models::{merge_day, CalendarError, ClinicConfigurationUpdate};

/// Read/partial-update of the per-tenant clinic configuration. Updates
/// merge at field level and re-validate the full resulting record
/// before anything is written.
pub struct ClinicConfigurationService {
    store: Arc<ClinicStore>,
}

impl ClinicConfigurationService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> ClinicConfiguration {
        self.store.configuration().await
    }

    pub async fn update(
        &self,
        update: ClinicConfigurationUpdate,
    ) -> Result<ClinicConfiguration, CalendarError> {
        debug!("Applying partial clinic configuration update");

        let current = self.store.configuration().await;

        let mut hours = [None; 7];
        for (index, (opening_update, closing_update)) in update.day_updates().iter().enumerate() {
            let (opening, closing) =
                merge_day(current.hours[index], *opening_update, *closing_update);
            hours[index] = match (opening, closing) {
                (Some(opening_time), Some(closing_time)) => {
                    if opening_time >= closing_time {
                        return Err(CalendarError::Validation(format!(
                            "Opening time must be before closing time on {}",
                            DAY_NAMES[index]
                        )));
                    }
                    Some(DayHours {
                        opening_time,
                        closing_time,
                    })
                }
                (None, None) => None,
                _ => {
                    return Err(CalendarError::IncompleteDayConfiguration(
                        DAY_NAMES[index].to_string(),
                    ))
                }
            };
        }

        let merged = ClinicConfiguration {
            default_appointment_duration: update
                .default_appointment_duration
                .unwrap_or(current.default_appointment_duration),
            time_slot_interval: update
                .time_slot_interval
                .unwrap_or(current.time_slot_interval),
            allow_online_booking: update
                .allow_online_booking
                .unwrap_or(current.allow_online_booking),
            require_confirmation: update
                .require_confirmation
                .unwrap_or(current.require_confirmation),
            cancellation_hours: update.cancellation_hours.unwrap_or(current.cancellation_hours),
            hours,
        };

        validate_configuration(&merged)?;
        self.store.replace_configuration(merged.clone()).await;

        info!("Clinic configuration updated");
        Ok(merged)
    }
}

fn validate_configuration(config: &ClinicConfiguration) -> Result<(), CalendarError> {
    let duration = config.default_appointment_duration;
    if !(MIN_APPOINTMENT_MINUTES..=MAX_APPOINTMENT_MINUTES).contains(&duration)
        || duration % APPOINTMENT_STEP_MINUTES != 0
    {
        return Err(CalendarError::Validation(format!(
            "Default appointment duration must be a multiple of {} within [{}, {}] minutes",
            APPOINTMENT_STEP_MINUTES, MIN_APPOINTMENT_MINUTES, MAX_APPOINTMENT_MINUTES
        )));
    }

    if config.time_slot_interval <= 0 {
        return Err(CalendarError::Validation(
            "Time slot interval must be positive".to_string(),
        ));
    }

    if config.cancellation_hours < 0 {
        return Err(CalendarError::Validation(
            "Cancellation hours cannot be negative".to_string(),
        ));
    }

    Ok(())
}
