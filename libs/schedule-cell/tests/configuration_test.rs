// libs/schedule-cell/tests/configuration_test.rs
//
// ClinicConfigurationService: partial updates, day-pair rules and the
// flat admin-form wire shape.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveTime;
use serde_json::json;

use schedule_cell::models::{ClinicConfigurationDto, ClinicConfigurationUpdate};
use schedule_cell::{CalendarError, ClinicConfigurationService};
use shared_models::clinic::ClinicConfiguration;
use shared_store::ClinicStore;

fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn service() -> ClinicConfigurationService {
    ClinicConfigurationService::new(Arc::new(ClinicStore::new(ClinicConfiguration::default())))
}

#[tokio::test]
async fn scalar_fields_merge_over_the_current_record() {
    let service = service();

    let updated = service
        .update(ClinicConfigurationUpdate {
            default_appointment_duration: Some(45),
            cancellation_hours: Some(48),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.default_appointment_duration, 45);
    assert_eq!(updated.cancellation_hours, 48);
    // Untouched fields keep their previous values.
    assert_eq!(updated.time_slot_interval, 15);
    assert!(updated.allow_online_booking);
    assert_eq!(updated.hours[1], ClinicConfiguration::default().hours[1]);
}

#[tokio::test]
async fn absent_day_keys_leave_hours_unchanged() {
    let update: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "time_slot_interval": 10
    }))
    .unwrap();

    let service = service();
    let updated = service.update(update).await.unwrap();

    assert_eq!(updated.time_slot_interval, 10);
    assert_eq!(updated.hours, ClinicConfiguration::default().hours);
}

#[tokio::test]
async fn explicit_nulls_close_a_day() {
    let update: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "opening_time_monday": null,
        "closing_time_monday": null
    }))
    .unwrap();

    let service = service();
    let updated = service.update(update).await.unwrap();

    assert!(updated.hours[1].is_none());
    // The rest of the week is untouched.
    assert_eq!(updated.hours[2], ClinicConfiguration::default().hours[2]);
}

#[tokio::test]
async fn opening_a_closed_day_requires_both_sides() {
    let service = service();

    // Sunday is closed by default; one side alone is incomplete.
    let half: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "opening_time_sunday": "10:00"
    }))
    .unwrap();
    let result = service.update(half).await;
    assert_matches!(result, Err(CalendarError::IncompleteDayConfiguration(day)) if day == "sunday");

    let full: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "opening_time_sunday": "10:00",
        "closing_time_sunday": "14:00"
    }))
    .unwrap();
    let updated = service.update(full).await.unwrap();
    let sunday = updated.hours[0].unwrap();
    assert_eq!(sunday.opening_time, t(10, 0));
    assert_eq!(sunday.closing_time, t(14, 0));
}

#[tokio::test]
async fn clearing_only_one_side_of_an_open_day_is_incomplete() {
    let update: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "closing_time_monday": null
    }))
    .unwrap();

    let result = service().update(update).await;

    assert_matches!(result, Err(CalendarError::IncompleteDayConfiguration(day)) if day == "monday");
}

#[tokio::test]
async fn one_side_updates_merge_with_the_stored_other_side() {
    let update: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "closing_time_monday": "20:00"
    }))
    .unwrap();

    let updated = service().update(update).await.unwrap();

    let monday = updated.hours[1].unwrap();
    assert_eq!(monday.opening_time, t(9, 0));
    assert_eq!(monday.closing_time, t(20, 0));
}

#[tokio::test]
async fn inverted_day_hours_are_rejected() {
    let update: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "opening_time_monday": "18:00",
        "closing_time_monday": "09:00"
    }))
    .unwrap();

    let result = service().update(update).await;

    assert_matches!(result, Err(CalendarError::Validation(_)));
}

#[tokio::test]
async fn duration_and_interval_policy_is_enforced() {
    let service = service();

    for duration in [10, 245, 31] {
        let result = service
            .update(ClinicConfigurationUpdate {
                default_appointment_duration: Some(duration),
                ..Default::default()
            })
            .await;
        assert_matches!(result, Err(CalendarError::Validation(_)), "duration {}", duration);
    }

    let result = service
        .update(ClinicConfigurationUpdate {
            time_slot_interval: Some(0),
            ..Default::default()
        })
        .await;
    assert_matches!(result, Err(CalendarError::Validation(_)));

    let result = service
        .update(ClinicConfigurationUpdate {
            cancellation_hours: Some(-1),
            ..Default::default()
        })
        .await;
    assert_matches!(result, Err(CalendarError::Validation(_)));
}

#[tokio::test]
async fn failed_updates_leave_the_stored_record_untouched() {
    let service = service();

    let bad: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "default_appointment_duration": 31,
        "closing_time_monday": null
    }))
    .unwrap();
    let _ = service.update(bad).await;

    let current = service.get().await;
    assert_eq!(current, ClinicConfiguration::default());
}

#[tokio::test]
async fn booleans_accept_integer_and_bool_forms() {
    let from_int: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "allow_online_booking": 0,
        "require_confirmation": 1
    }))
    .unwrap();
    assert_eq!(from_int.allow_online_booking, Some(false));
    assert_eq!(from_int.require_confirmation, Some(true));

    let from_bool: ClinicConfigurationUpdate = serde_json::from_value(json!({
        "allow_online_booking": true
    }))
    .unwrap();
    assert_eq!(from_bool.allow_online_booking, Some(true));
}

#[test]
fn dto_serializes_the_flat_admin_shape() {
    let dto = ClinicConfigurationDto::from(ClinicConfiguration::default());
    let value = serde_json::to_value(&dto).unwrap();

    assert_eq!(value["allow_online_booking"], json!(1));
    assert_eq!(value["require_confirmation"], json!(0));
    assert_eq!(value["opening_time_monday"], json!("09:00:00"));
    assert_eq!(value["closing_time_saturday"], json!("13:00:00"));
    assert_eq!(value["opening_time_sunday"], json!(null));
}
