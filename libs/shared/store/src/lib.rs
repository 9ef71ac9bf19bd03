//! In-process storage for the scheduling core.
//!
//! `ClinicStore` is shared across request handlers as an `Arc` and is the
//! single owner of all mutable scheduling state: the clinic
//! configuration, weekly availability templates, schedule blocks,
//! appointments and the registry records the booking path
//! existence-checks. It also hands out the per-professional booking
//! locks that serialize conflict-check-and-commit.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use shared_models::appointment::Appointment;
use shared_models::calendar::{AvailabilityEntry, ScheduleBlock};
use shared_models::clinic::ClinicConfiguration;
use shared_models::registry::{Client, Pet, Professional};

#[derive(Default)]
struct StoreInner {
    configuration: ClinicConfiguration,
    professionals: HashMap<Uuid, Professional>,
    clients: HashMap<Uuid, Client>,
    pets: HashMap<Uuid, Pet>,
    availability: HashMap<Uuid, AvailabilityEntry>,
    blocks: HashMap<Uuid, ScheduleBlock>,
    appointments: HashMap<Uuid, Appointment>,
}

pub struct ClinicStore {
    inner: RwLock<StoreInner>,
    booking_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ClinicStore {
    pub fn new(configuration: ClinicConfiguration) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                configuration,
                ..StoreInner::default()
            }),
            booking_locks: Mutex::new(HashMap::new()),
        }
    }

    // ----- clinic configuration -----

    pub async fn configuration(&self) -> ClinicConfiguration {
        self.inner.read().await.configuration.clone()
    }

    pub async fn replace_configuration(&self, configuration: ClinicConfiguration) {
        self.inner.write().await.configuration = configuration;
    }

    // ----- registry -----

    pub async fn insert_professional(&self, professional: Professional) {
        self.inner
            .write()
            .await
            .professionals
            .insert(professional.id, professional);
    }

    pub async fn professional(&self, id: Uuid) -> Option<Professional> {
        self.inner.read().await.professionals.get(&id).cloned()
    }

    pub async fn insert_client(&self, client: Client) {
        self.inner.write().await.clients.insert(client.id, client);
    }

    pub async fn client_exists(&self, id: Uuid) -> bool {
        self.inner.read().await.clients.contains_key(&id)
    }

    pub async fn insert_pet(&self, pet: Pet) {
        self.inner.write().await.pets.insert(pet.id, pet);
    }

    pub async fn pet(&self, id: Uuid) -> Option<Pet> {
        self.inner.read().await.pets.get(&id).cloned()
    }

    // ----- weekly availability -----

    pub async fn availability_entries(&self, professional_id: Uuid) -> Vec<AvailabilityEntry> {
        let inner = self.inner.read().await;
        let mut entries: Vec<AvailabilityEntry> = inner
            .availability
            .values()
            .filter(|entry| entry.professional_id == professional_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.day_of_week, entry.start_time));
        entries
    }

    pub async fn availability_entry(&self, id: Uuid) -> Option<AvailabilityEntry> {
        self.inner.read().await.availability.get(&id).cloned()
    }

    pub async fn insert_availability_entry(&self, entry: AvailabilityEntry) {
        self.inner.write().await.availability.insert(entry.id, entry);
    }

    pub async fn update_availability_entry(&self, entry: AvailabilityEntry) -> bool {
        let mut inner = self.inner.write().await;
        match inner.availability.get_mut(&entry.id) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => false,
        }
    }

    pub async fn delete_availability_entry(&self, id: Uuid) -> bool {
        self.inner.write().await.availability.remove(&id).is_some()
    }

    // ----- schedule blocks -----

    pub async fn blocks_for(&self, professional_id: Uuid) -> Vec<ScheduleBlock> {
        let inner = self.inner.read().await;
        let mut blocks: Vec<ScheduleBlock> = inner
            .blocks
            .values()
            .filter(|block| block.professional_id == professional_id)
            .cloned()
            .collect();
        blocks.sort_by_key(|block| block.start_datetime);
        blocks
    }

    pub async fn insert_block(&self, block: ScheduleBlock) {
        self.inner.write().await.blocks.insert(block.id, block);
    }

    pub async fn delete_block(&self, id: Uuid) -> bool {
        self.inner.write().await.blocks.remove(&id).is_some()
    }

    // ----- appointments -----

    pub async fn appointment(&self, id: Uuid) -> Option<Appointment> {
        self.inner.read().await.appointments.get(&id).cloned()
    }

    pub async fn appointments_for_professional_on(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Vec<Appointment> {
        let inner = self.inner.read().await;
        let mut appointments: Vec<Appointment> = inner
            .appointments
            .values()
            .filter(|appointment| {
                appointment.professional_id == professional_id
                    && appointment.appointment_date == date
            })
            .cloned()
            .collect();
        appointments.sort_by_key(|appointment| appointment.appointment_time);
        appointments
    }

    pub async fn insert_appointment(&self, appointment: Appointment) {
        self.inner
            .write()
            .await
            .appointments
            .insert(appointment.id, appointment);
    }

    pub async fn update_appointment(&self, appointment: Appointment) -> bool {
        let mut inner = self.inner.write().await;
        match inner.appointments.get_mut(&appointment.id) {
            Some(existing) => {
                *existing = appointment;
                true
            }
            None => false,
        }
    }

    // ----- booking serialization -----

    /// Hand out the exclusive booking lock for one professional. Holding
    /// the returned mutex serializes conflict-check-and-commit for that
    /// professional only; bookings for other professionals proceed
    /// independently.
    pub async fn booking_lock(&self, professional_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.booking_locks.lock().await;
        let lock = locks
            .entry(professional_id)
            .or_insert_with(|| {
                debug!("Creating booking lock for professional {}", professional_id);
                Arc::new(Mutex::new(()))
            })
            .clone();
        lock
    }
}

impl Default for ClinicStore {
    fn default() -> Self {
        Self::new(ClinicConfiguration::default())
    }
}
