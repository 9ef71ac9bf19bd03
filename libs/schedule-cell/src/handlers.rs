// libs/schedule-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::models::{
    ClinicConfigurationDto, ClinicConfigurationUpdate, CreateAvailabilityEntryRequest,
    CreateBlockRequest, UpdateAvailabilityEntryRequest,
};
use crate::services::calendar::CalendarService;
use crate::services::clinic::ClinicConfigurationService;

// ==============================================================================
// WEEKLY AVAILABILITY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ClinicStore>>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    let entries = service.list_schedule(professional_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": entries
    })))
}

#[axum::debug_handler]
pub async fn create_schedule_entry(
    State(state): State<Arc<ClinicStore>>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<CreateAvailabilityEntryRequest>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    let entry = service.create_entry(professional_id, request).await?;

    Ok(Json(json!({
        "success": true,
        "data": entry,
        "message": "Availability entry created"
    })))
}

#[axum::debug_handler]
pub async fn update_schedule_entry(
    State(state): State<Arc<ClinicStore>>,
    Path((professional_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateAvailabilityEntryRequest>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    let entry = service
        .update_entry(professional_id, entry_id, request)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": entry
    })))
}

#[axum::debug_handler]
pub async fn delete_schedule_entry(
    State(state): State<Arc<ClinicStore>>,
    Path((professional_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    service.delete_entry(professional_id, entry_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Availability entry deleted"
    })))
}

// ==============================================================================
// SCHEDULE BLOCK HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_blocks(
    State(state): State<Arc<ClinicStore>>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    let blocks = service.list_blocks(professional_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": blocks
    })))
}

#[axum::debug_handler]
pub async fn create_block(
    State(state): State<Arc<ClinicStore>>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<CreateBlockRequest>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    let (block, warnings) = service.create_block(professional_id, request).await?;

    Ok(Json(json!({
        "success": true,
        "data": block,
        "warnings": warnings,
        "message": "Schedule block created"
    })))
}

#[axum::debug_handler]
pub async fn delete_block(
    State(state): State<Arc<ClinicStore>>,
    Path((professional_id, block_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let service = CalendarService::new(state);

    service.delete_block(professional_id, block_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Schedule block deleted"
    })))
}

// ==============================================================================
// CLINIC CONFIGURATION HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_configuration(
    State(state): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicConfigurationService::new(state);

    let dto = ClinicConfigurationDto::from(service.get().await);

    Ok(Json(json!({
        "success": true,
        "data": dto
    })))
}

#[axum::debug_handler]
pub async fn update_configuration(
    State(state): State<Arc<ClinicStore>>,
    Json(request): Json<ClinicConfigurationUpdate>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicConfigurationService::new(state);

    let dto = ClinicConfigurationDto::from(service.update(request).await?);

    Ok(Json(json!({
        "success": true,
        "data": dto,
        "message": "Clinic configuration updated"
    })))
}
