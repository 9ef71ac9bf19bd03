// libs/schedule-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

/// Professional-scoped calendar routes nested under `/v1/professionals`.
pub fn schedule_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/{professional_id}/schedule", get(handlers::get_schedule))
        .route(
            "/{professional_id}/schedule",
            post(handlers::create_schedule_entry),
        )
        .route(
            "/{professional_id}/schedule/{entry_id}",
            put(handlers::update_schedule_entry),
        )
        .route(
            "/{professional_id}/schedule/{entry_id}",
            delete(handlers::delete_schedule_entry),
        )
        .route(
            "/{professional_id}/schedule/blocks",
            get(handlers::get_blocks),
        )
        .route(
            "/{professional_id}/schedule/blocks",
            post(handlers::create_block),
        )
        .route(
            "/{professional_id}/schedule/blocks/{block_id}",
            delete(handlers::delete_block),
        )
        .with_state(state)
}

/// Routes nested under `/v1/clinic`.
pub fn clinic_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/configuration", get(handlers::get_configuration))
        .route("/configuration", put(handlers::update_configuration))
        .with_state(state)
}
