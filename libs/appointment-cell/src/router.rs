// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

/// Routes nested under `/v1/appointments`.
pub fn appointment_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route(
            "/{appointment_id}/status",
            patch(handlers::update_appointment_status),
        )
        .with_state(state)
}

/// Professional-scoped routes nested under `/v1/professionals`,
/// alongside the schedule-cell routes.
pub fn professional_booking_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/{professional_id}/availability",
            get(handlers::get_availability),
        )
        .route(
            "/{professional_id}/appointments",
            get(handlers::get_professional_appointments),
        )
        .with_state(state)
}
