// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, warn};

use shared_models::appointment::AppointmentStatus;

use crate::models::BookingError;

pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: &AppointmentStatus,
        new_status: &AppointmentStatus,
    ) -> Result<(), BookingError> {
        debug!(
            "Validating status transition from {} to {}",
            current_status, new_status
        );

        let valid_transitions = self.valid_transitions(current_status);

        if !valid_transitions.contains(new_status) {
            warn!(
                "Invalid status transition attempted: {} -> {}",
                current_status, new_status
            );
            return Err(BookingError::Validation(format!(
                "Cannot transition appointment from {} to {}",
                current_status, new_status
            )));
        }

        Ok(())
    }

    /// Get all valid next statuses for a given current status
    pub fn valid_transitions(&self, current_status: &AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Scheduled => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            // Terminal states - no transitions allowed
            AppointmentStatus::Completed
            | AppointmentStatus::Cancelled
            | AppointmentStatus::NoShow => vec![],
        }
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_allow_no_transitions() {
        let lifecycle = AppointmentLifecycleService::new();
        for terminal in [
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert!(lifecycle.valid_transitions(&terminal).is_empty());
        }
    }

    #[test]
    fn scheduled_can_be_confirmed_but_not_completed() {
        let lifecycle = AppointmentLifecycleService::new();
        assert!(lifecycle
            .validate_status_transition(&AppointmentStatus::Scheduled, &AppointmentStatus::Confirmed)
            .is_ok());
        assert!(lifecycle
            .validate_status_transition(&AppointmentStatus::Scheduled, &AppointmentStatus::Completed)
            .is_err());
    }
}
