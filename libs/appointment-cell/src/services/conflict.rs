use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use shared_store::ClinicStore;

/// Strict open-interval overlap: two intervals overlap iff each starts
/// before the other ends. Back-to-back intervals (`end == next.start`)
/// do not overlap.
pub fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

pub struct ConflictDetectionService {
    store: Arc<ClinicStore>,
}

impl ConflictDetectionService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    /// Collect every interval that makes the professional busy on
    /// `date`: schedule blocks touching the day and calendar-occupying
    /// appointments.
    pub async fn busy_intervals_on(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        let day_start = date.and_hms_opt(0, 0, 0).unwrap();
        let day_end = day_start + chrono::Duration::days(1);

        let mut busy = Vec::new();

        for block in self.store.blocks_for(professional_id).await {
            if intervals_overlap(block.start_datetime, block.end_datetime, day_start, day_end) {
                busy.push((block.start_datetime, block.end_datetime));
            }
        }

        for appointment in self
            .store
            .appointments_for_professional_on(professional_id, date)
            .await
        {
            if appointment.occupies_calendar() {
                busy.push((appointment.start_datetime(), appointment.end_datetime()));
            }
        }

        busy
    }

    /// Check one candidate interval against the professional's live
    /// busy set.
    pub async fn has_conflict(
        &self,
        professional_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> bool {
        let busy = self.busy_intervals_on(professional_id, start.date()).await;
        let conflict = busy
            .iter()
            .any(|(busy_start, busy_end)| intervals_overlap(start, end, *busy_start, *busy_end));

        if conflict {
            debug!(
                "Conflict detected for professional {} in [{}, {})",
                professional_id, start, end
            );
        }

        conflict
    }
}
