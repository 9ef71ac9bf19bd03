// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::models::{
    AvailabilityQuery, BookAppointmentRequest, CancelAppointmentRequest, DayScheduleQuery,
    UpdateStatusRequest,
};
use crate::services::availability::AvailabilityEngine;
use crate::services::booking::BookingCoordinator;

/// Ordered bookable slots for a professional/date/duration, consumed by
/// the booking form.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ClinicStore>>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let engine = AvailabilityEngine::new(state);

    let slots = engine
        .compute_slots(professional_id, query.date, query.duration_minutes)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": slots
    })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ClinicStore>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let coordinator = BookingCoordinator::new(state);

    let appointment = coordinator.book_appointment(request).await?;

    Ok(Json(json!({
        "success": true,
        "data": appointment,
        "message": "Appointment booked"
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let coordinator = BookingCoordinator::new(state);

    let appointment = coordinator.get_appointment(appointment_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": appointment
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<Uuid>,
    request: Option<Json<CancelAppointmentRequest>>,
) -> Result<Json<Value>, AppError> {
    let coordinator = BookingCoordinator::new(state);

    // The admin override path requires external authorization and is
    // not exposed here.
    let appointment = coordinator.cancel_appointment(appointment_id, false).await?;

    if let Some(Json(body)) = request {
        if let Some(reason) = body.reason {
            tracing::info!("Appointment {} cancelled: {}", appointment_id, reason);
        }
    }

    Ok(Json(json!({
        "success": true,
        "data": appointment,
        "message": "Appointment cancelled"
    })))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let coordinator = BookingCoordinator::new(state);

    let appointment = coordinator
        .update_status(appointment_id, request.status)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": appointment
    })))
}

/// Day listing backing the schedule view.
#[axum::debug_handler]
pub async fn get_professional_appointments(
    State(state): State<Arc<ClinicStore>>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<DayScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let coordinator = BookingCoordinator::new(state);

    let appointments = coordinator
        .appointments_for_day(professional_id, query.date)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": appointments
    })))
}
