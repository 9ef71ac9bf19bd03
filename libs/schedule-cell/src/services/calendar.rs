// libs/schedule-cell/src/services/calendar.rs
use chrono::{NaiveTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::calendar::{AvailabilityEntry, ScheduleBlock};
use shared_store::ClinicStore;

use crate::models::{CalendarError, CreateAvailabilityEntryRequest, CreateBlockRequest, UpdateAvailabilityEntryRequest};

/// Management of a professional's weekly template and ad-hoc blocks.
pub struct CalendarService {
    store: Arc<ClinicStore>,
}

impl CalendarService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn list_schedule(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<AvailabilityEntry>, CalendarError> {
        self.require_professional(professional_id).await?;
        Ok(self.store.availability_entries(professional_id).await)
    }

    pub async fn create_entry(
        &self,
        professional_id: Uuid,
        request: CreateAvailabilityEntryRequest,
    ) -> Result<AvailabilityEntry, CalendarError> {
        debug!("Creating availability entry for professional {}", professional_id);
        self.require_professional(professional_id).await?;

        validate_entry_times(request.day_of_week, request.start_time, request.end_time)?;
        self.check_entry_conflicts(
            professional_id,
            request.day_of_week,
            request.start_time,
            request.end_time,
            None,
        )
        .await?;

        let entry = AvailabilityEntry {
            id: Uuid::new_v4(),
            professional_id,
            day_of_week: request.day_of_week,
            start_time: request.start_time,
            end_time: request.end_time,
            is_available: request.is_available.unwrap_or(true),
        };
        self.store.insert_availability_entry(entry.clone()).await;

        info!("Availability entry {} created", entry.id);
        Ok(entry)
    }

    pub async fn update_entry(
        &self,
        professional_id: Uuid,
        entry_id: Uuid,
        request: UpdateAvailabilityEntryRequest,
    ) -> Result<AvailabilityEntry, CalendarError> {
        debug!("Updating availability entry {}", entry_id);

        let current = self
            .store
            .availability_entry(entry_id)
            .await
            .filter(|entry| entry.professional_id == professional_id)
            .ok_or_else(|| CalendarError::NotFound("Availability entry".to_string()))?;

        let updated = AvailabilityEntry {
            day_of_week: request.day_of_week.unwrap_or(current.day_of_week),
            start_time: request.start_time.unwrap_or(current.start_time),
            end_time: request.end_time.unwrap_or(current.end_time),
            is_available: request.is_available.unwrap_or(current.is_available),
            ..current
        };

        validate_entry_times(updated.day_of_week, updated.start_time, updated.end_time)?;
        self.check_entry_conflicts(
            professional_id,
            updated.day_of_week,
            updated.start_time,
            updated.end_time,
            Some(entry_id),
        )
        .await?;

        self.store.update_availability_entry(updated.clone()).await;
        Ok(updated)
    }

    pub async fn delete_entry(
        &self,
        professional_id: Uuid,
        entry_id: Uuid,
    ) -> Result<(), CalendarError> {
        let known = self
            .store
            .availability_entry(entry_id)
            .await
            .is_some_and(|entry| entry.professional_id == professional_id);
        if !known {
            return Err(CalendarError::NotFound("Availability entry".to_string()));
        }
        self.store.delete_availability_entry(entry_id).await;
        Ok(())
    }

    pub async fn list_blocks(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<ScheduleBlock>, CalendarError> {
        self.require_professional(professional_id).await?;
        Ok(self.store.blocks_for(professional_id).await)
    }

    /// Blocks may stack against other blocks, but overlapping existing
    /// appointments is surfaced as warnings; the appointments stay
    /// booked.
    pub async fn create_block(
        &self,
        professional_id: Uuid,
        request: CreateBlockRequest,
    ) -> Result<(ScheduleBlock, Vec<String>), CalendarError> {
        debug!("Creating schedule block for professional {}", professional_id);
        self.require_professional(professional_id).await?;

        if request.start_datetime >= request.end_datetime {
            return Err(CalendarError::Validation(
                "Block start must be before block end".to_string(),
            ));
        }

        let block = ScheduleBlock {
            id: Uuid::new_v4(),
            professional_id,
            start_datetime: request.start_datetime,
            end_datetime: request.end_datetime,
            reason: request.reason,
            created_at: Utc::now().naive_utc(),
        };

        let warnings = self.overlapping_appointment_warnings(&block).await;
        if !warnings.is_empty() {
            warn!(
                "Block {} overlaps {} existing appointment(s)",
                block.id,
                warnings.len()
            );
        }

        self.store.insert_block(block.clone()).await;

        info!("Schedule block {} created", block.id);
        Ok((block, warnings))
    }

    pub async fn delete_block(
        &self,
        professional_id: Uuid,
        block_id: Uuid,
    ) -> Result<(), CalendarError> {
        let known = self
            .store
            .blocks_for(professional_id)
            .await
            .iter()
            .any(|block| block.id == block_id);
        if !known {
            return Err(CalendarError::NotFound("Schedule block".to_string()));
        }
        self.store.delete_block(block_id).await;
        Ok(())
    }

    async fn require_professional(&self, professional_id: Uuid) -> Result<(), CalendarError> {
        if self.store.professional(professional_id).await.is_none() {
            return Err(CalendarError::NotFound("Professional".to_string()));
        }
        Ok(())
    }

    async fn check_entry_conflicts(
        &self,
        professional_id: Uuid,
        day_of_week: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<Uuid>,
    ) -> Result<(), CalendarError> {
        let existing = self.store.availability_entries(professional_id).await;

        for entry in existing {
            if entry.day_of_week != day_of_week || Some(entry.id) == exclude_id {
                continue;
            }
            // Open-interval test; adjacent entries are fine.
            if start_time < entry.end_time && entry.start_time < end_time {
                return Err(CalendarError::OverlappingAvailability);
            }
        }

        Ok(())
    }

    async fn overlapping_appointment_warnings(&self, block: &ScheduleBlock) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut date = block.start_datetime.date();
        let last = block.end_datetime.date();

        while date <= last {
            for appointment in self
                .store
                .appointments_for_professional_on(block.professional_id, date)
                .await
            {
                let overlaps = appointment.occupies_calendar()
                    && appointment.start_datetime() < block.end_datetime
                    && block.start_datetime < appointment.end_datetime();
                if overlaps {
                    warnings.push(format!(
                        "Block overlaps appointment {} at {} {}",
                        appointment.id, appointment.appointment_date, appointment.appointment_time
                    ));
                }
            }
            date += chrono::Duration::days(1);
        }

        warnings
    }
}

fn validate_entry_times(
    day_of_week: u8,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<(), CalendarError> {
    if day_of_week > 6 {
        return Err(CalendarError::Validation(
            "Day of week must be between 0 (Sunday) and 6 (Saturday)".to_string(),
        ));
    }
    if start_time >= end_time {
        return Err(CalendarError::Validation(
            "Start time must be before end time".to_string(),
        ));
    }
    Ok(())
}
