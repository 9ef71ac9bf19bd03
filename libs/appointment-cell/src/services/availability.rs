use chrono::{Datelike, Duration, NaiveDate};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use shared_models::clinic::day_index;
use shared_store::ClinicStore;

use crate::models::{validate_duration, BookingError, Slot};
use crate::services::conflict::{intervals_overlap, ConflictDetectionService};

/// Pure, read-only slot computation: composes clinic hours, the
/// professional's weekly template, schedule blocks and existing
/// appointments into the ordered list of bookable slots for one date.
pub struct AvailabilityEngine {
    store: Arc<ClinicStore>,
    conflict_service: ConflictDetectionService,
}

impl AvailabilityEngine {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        let conflict_service = ConflictDetectionService::new(Arc::clone(&store));
        Self {
            store,
            conflict_service,
        }
    }

    /// Compute bookable slots for a professional on `date`. A closed
    /// clinic day, an empty weekly template or an inactive professional
    /// yields an empty list, not an error; only an out-of-policy
    /// duration or an unknown professional fails.
    pub async fn compute_slots(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
        requested_duration: Option<i32>,
    ) -> Result<Vec<Slot>, BookingError> {
        let config = self.store.configuration().await;
        let duration_minutes = requested_duration.unwrap_or(config.default_appointment_duration);
        validate_duration(duration_minutes)?;

        let professional = self
            .store
            .professional(professional_id)
            .await
            .ok_or_else(|| BookingError::NotFound("Professional".to_string()))?;
        if !professional.active {
            debug!("Professional {} is inactive, no slots", professional_id);
            return Ok(vec![]);
        }

        let weekday = date.weekday();
        let Some(day_hours) = config.hours_for(weekday) else {
            debug!("Clinic closed on {}, no slots for {}", weekday, date);
            return Ok(vec![]);
        };

        let entries = self.store.availability_entries(professional_id).await;
        let day = day_index(weekday) as u8;
        let duration = Duration::minutes(duration_minutes as i64);
        let interval = Duration::minutes(config.time_slot_interval as i64);

        let busy = self
            .conflict_service
            .busy_intervals_on(professional_id, date)
            .await;

        let mut slots = Vec::new();

        for entry in entries {
            if entry.day_of_week != day || !entry.is_available {
                continue;
            }

            // Clip the template window to the clinic's opening hours.
            let window_start = entry.start_time.max(day_hours.opening_time);
            let window_end = entry.end_time.min(day_hours.closing_time);
            if window_start >= window_end {
                continue;
            }

            let window_end_dt = date.and_time(window_end);
            let mut candidate = date.and_time(window_start);

            // Boundary-exact fits are bookable: stop only once the slot
            // would run past the window end.
            while candidate + duration <= window_end_dt {
                let candidate_end = candidate + duration;
                let blocked = busy.iter().any(|(busy_start, busy_end)| {
                    intervals_overlap(candidate, candidate_end, *busy_start, *busy_end)
                });

                if !blocked {
                    slots.push(Slot {
                        start_time: candidate.time(),
                        end_time: candidate_end.time(),
                    });
                }

                candidate += interval;
            }
        }

        // Windows for one day never overlap, so starts are distinct;
        // sorting orders slots across split shifts.
        slots.sort_by_key(|slot| slot.start_time);

        debug!(
            "Computed {} slots for professional {} on {}",
            slots.len(),
            professional_id,
            date
        );
        Ok(slots)
    }
}
