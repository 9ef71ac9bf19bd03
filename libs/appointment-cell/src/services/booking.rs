// libs/appointment-cell/src/services/booking.rs
use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_models::clinic::{day_index, ClinicConfiguration};
use shared_store::ClinicStore;

use crate::models::{validate_duration, BookAppointmentRequest, BookingError};
use crate::services::conflict::ConflictDetectionService;
use crate::services::lifecycle::AppointmentLifecycleService;

/// The only mutating path into the appointment book. Serializes
/// conflict-check-and-commit per professional via the store's booking
/// locks: the lock is held across re-validate + insert only, never
/// across existence checks or response serialization.
pub struct BookingCoordinator {
    store: Arc<ClinicStore>,
    conflict_service: ConflictDetectionService,
    lifecycle_service: AppointmentLifecycleService,
}

impl BookingCoordinator {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        let conflict_service = ConflictDetectionService::new(Arc::clone(&store));
        Self {
            store,
            conflict_service,
            lifecycle_service: AppointmentLifecycleService::new(),
        }
    }

    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        self.book_appointment_at(request, Utc::now().naive_utc()).await
    }

    /// Booking with an explicit "now", used directly by tests.
    pub async fn book_appointment_at(
        &self,
        request: BookAppointmentRequest,
        now: NaiveDateTime,
    ) -> Result<Appointment, BookingError> {
        info!(
            "Booking appointment for client {} with professional {} on {} {}",
            request.client_id,
            request.professional_id,
            request.appointment_date,
            request.appointment_time
        );

        let config = self.store.configuration().await;
        if !config.allow_online_booking {
            return Err(BookingError::Validation(
                "Online booking is disabled for this clinic".to_string(),
            ));
        }

        let duration_minutes = request
            .duration_minutes
            .unwrap_or(config.default_appointment_duration);
        validate_duration(duration_minutes)?;

        // Existence checks happen before any lock is taken.
        let professional = self
            .store
            .professional(request.professional_id)
            .await
            .ok_or_else(|| BookingError::NotFound("Professional".to_string()))?;
        if !professional.active {
            return Err(BookingError::ProfessionalUnavailable);
        }
        if !self.store.client_exists(request.client_id).await {
            return Err(BookingError::NotFound("Client".to_string()));
        }
        let pet = self
            .store
            .pet(request.pet_id)
            .await
            .ok_or_else(|| BookingError::NotFound("Pet".to_string()))?;
        if pet.client_id != request.client_id {
            return Err(BookingError::Validation(
                "Pet does not belong to the given client".to_string(),
            ));
        }

        let start = request.appointment_date.and_time(request.appointment_time);
        let end = start + ChronoDuration::minutes(duration_minutes as i64);

        // The form constrains the date picker client-side; the server
        // re-validates regardless.
        if start <= now {
            return Err(BookingError::PastDateTime);
        }

        // Critical section: re-validate against live state, then insert.
        let lock = self.store.booking_lock(request.professional_id).await;
        let _guard = lock.lock().await;

        self.validate_within_calendar(&config, request.professional_id, start, end)
            .await?;

        if self
            .conflict_service
            .has_conflict(request.professional_id, start, end)
            .await
        {
            warn!(
                "Slot conflict for professional {} at {}",
                request.professional_id, start
            );
            return Err(BookingError::SlotConflict);
        }

        let status = if config.require_confirmation {
            AppointmentStatus::Scheduled
        } else {
            AppointmentStatus::Confirmed
        };

        let appointment = Appointment {
            id: Uuid::new_v4(),
            client_id: request.client_id,
            pet_id: request.pet_id,
            professional_id: request.professional_id,
            specialty_id: request.specialty_id,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time,
            duration_minutes,
            status,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        // Single atomic commit point.
        self.store.insert_appointment(appointment.clone()).await;

        info!(
            "Appointment {} booked for professional {}",
            appointment.id, appointment.professional_id
        );
        Ok(appointment)
    }

    pub async fn cancel_appointment(
        &self,
        appointment_id: Uuid,
        override_window: bool,
    ) -> Result<Appointment, BookingError> {
        self.cancel_appointment_at(appointment_id, override_window, Utc::now().naive_utc())
            .await
    }

    /// Cancellation honors the configured lead time: with
    /// `cancellation_hours > 0`, cancelling later than
    /// `start - cancellation_hours` fails unless the override path is
    /// taken (authorization for the override is external).
    pub async fn cancel_appointment_at(
        &self,
        appointment_id: Uuid,
        override_window: bool,
        now: NaiveDateTime,
    ) -> Result<Appointment, BookingError> {
        let mut appointment = self
            .store
            .appointment(appointment_id)
            .await
            .ok_or_else(|| BookingError::NotFound("Appointment".to_string()))?;

        self.lifecycle_service
            .validate_status_transition(&appointment.status, &AppointmentStatus::Cancelled)?;

        let config = self.store.configuration().await;
        if config.cancellation_hours > 0 && !override_window {
            let deadline =
                appointment.start_datetime() - ChronoDuration::hours(config.cancellation_hours);
            if now > deadline {
                debug!(
                    "Cancellation window expired for appointment {} (deadline {})",
                    appointment_id, deadline
                );
                return Err(BookingError::CancellationWindowExpired);
            }
        }

        appointment.status = AppointmentStatus::Cancelled;
        appointment.updated_at = now;
        self.store.update_appointment(appointment.clone()).await;

        info!("Appointment {} cancelled", appointment_id);
        Ok(appointment)
    }

    pub async fn update_status(
        &self,
        appointment_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, BookingError> {
        let mut appointment = self
            .store
            .appointment(appointment_id)
            .await
            .ok_or_else(|| BookingError::NotFound("Appointment".to_string()))?;

        self.lifecycle_service
            .validate_status_transition(&appointment.status, &new_status)?;

        appointment.status = new_status;
        appointment.updated_at = Utc::now().naive_utc();
        self.store.update_appointment(appointment.clone()).await;
        Ok(appointment)
    }

    pub async fn get_appointment(&self, appointment_id: Uuid) -> Result<Appointment, BookingError> {
        self.store
            .appointment(appointment_id)
            .await
            .ok_or_else(|| BookingError::NotFound("Appointment".to_string()))
    }

    pub async fn appointments_for_day(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, BookingError> {
        if self.store.professional(professional_id).await.is_none() {
            return Err(BookingError::NotFound("Professional".to_string()));
        }
        Ok(self
            .store
            .appointments_for_professional_on(professional_id, date)
            .await)
    }

    /// The requested interval must sit inside the clinic's hours for
    /// that weekday and inside one of the professional's available
    /// template windows. Containment in both equals containment in
    /// their intersection.
    async fn validate_within_calendar(
        &self,
        config: &ClinicConfiguration,
        professional_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(), BookingError> {
        let date = start.date();
        let weekday = date.weekday();

        let day_hours = config.hours_for(weekday).ok_or(BookingError::ClinicClosed)?;
        let open = date.and_time(day_hours.opening_time);
        let close = date.and_time(day_hours.closing_time);
        if start < open || end > close {
            return Err(BookingError::ClinicClosed);
        }

        let day = day_index(weekday) as u8;
        let within_template = self
            .store
            .availability_entries(professional_id)
            .await
            .iter()
            .any(|entry| {
                entry.day_of_week == day
                    && entry.is_available
                    && date.and_time(entry.start_time) <= start
                    && end <= date.and_time(entry.end_time)
            });

        if !within_template {
            return Err(BookingError::ProfessionalUnavailable);
        }

        Ok(())
    }
}
