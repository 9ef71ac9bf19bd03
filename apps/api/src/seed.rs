//! Demo data for local development. Registry administration (staff,
//! clients, pets) is owned by external collaborators; seeding here only
//! makes a fresh in-memory store bookable.

use chrono::NaiveTime;
use tracing::info;
use uuid::Uuid;

use shared_models::calendar::AvailabilityEntry;
use shared_models::registry::{Client, Pet, Professional};
use shared_store::ClinicStore;

pub async fn seed_demo_data(store: &ClinicStore) {
    let professional_id = Uuid::new_v4();
    let client_id = Uuid::new_v4();

    store
        .insert_professional(Professional {
            id: professional_id,
            full_name: "Dr. Ana Souza".to_string(),
            specialty_id: None,
            active: true,
        })
        .await;

    store
        .insert_client(Client {
            id: client_id,
            full_name: "Marcos Lima".to_string(),
        })
        .await;

    store
        .insert_pet(Pet {
            id: Uuid::new_v4(),
            client_id,
            name: "Thor".to_string(),
        })
        .await;

    // Monday through Friday, 09:00-18:00.
    for day in 1..=5 {
        store
            .insert_availability_entry(AvailabilityEntry {
                id: Uuid::new_v4(),
                professional_id,
                day_of_week: day,
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                is_available: true,
            })
            .await;
    }

    info!(
        "Seeded demo data: professional {} client {}",
        professional_id, client_id
    );
}
