use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::{appointment_routes, professional_booking_routes};
use schedule_cell::router::{clinic_routes, schedule_routes};
use shared_store::ClinicStore;

pub fn create_router(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(|| async { "Veterinary clinic scheduling API is running!" }))
        .nest(
            "/v1/professionals",
            schedule_routes(store.clone()).merge(professional_booking_routes(store.clone())),
        )
        .nest("/v1/clinic", clinic_routes(store.clone()))
        .nest("/v1/appointments", appointment_routes(store))
}
