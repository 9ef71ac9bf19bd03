// libs/schedule-cell/tests/handlers_test.rs
//
// Schedule and configuration HTTP surface through the nested routers.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use schedule_cell::router::{clinic_routes, schedule_routes};
use shared_models::clinic::ClinicConfiguration;
use shared_models::registry::Professional;
use shared_store::ClinicStore;

struct TestApp {
    router: Router,
    professional_id: Uuid,
}

async fn spawn_app() -> TestApp {
    let store = Arc::new(ClinicStore::new(ClinicConfiguration::default()));
    let professional_id = Uuid::new_v4();
    store
        .insert_professional(Professional {
            id: professional_id,
            full_name: "Dr. Test".to_string(),
            specialty_id: None,
            active: true,
        })
        .await;

    let router = Router::new()
        .nest("/v1/professionals", schedule_routes(Arc::clone(&store)))
        .nest("/v1/clinic", clinic_routes(store));

    TestApp {
        router,
        professional_id,
    }
}

impl TestApp {
    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}

#[tokio::test]
async fn schedule_crud_round_trip() {
    let app = spawn_app().await;
    let base = format!("/v1/professionals/{}/schedule", app.professional_id);

    let (status, created) = app
        .request(
            "POST",
            &base,
            Some(json!({
                "day_of_week": 1,
                "start_time": "09:00",
                "end_time": "12:00"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["data"]["is_available"], json!(true));
    let entry_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .request(
            "PUT",
            &format!("{}/{}", base, entry_id),
            Some(json!({ "end_time": "13:00" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["end_time"], json!("13:00:00"));

    let (status, listed) = app.request("GET", &base, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let (status, _) = app
        .request("DELETE", &format!("{}/{}", base, entry_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = app.request("GET", &base, None).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn overlapping_entry_is_400() {
    let app = spawn_app().await;
    let base = format!("/v1/professionals/{}/schedule", app.professional_id);
    let entry = json!({ "day_of_week": 1, "start_time": "09:00", "end_time": "12:00" });

    app.request("POST", &base, Some(entry)).await;
    let (status, body) = app
        .request(
            "POST",
            &base,
            Some(json!({ "day_of_week": 1, "start_time": "11:00", "end_time": "14:00" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn schedule_for_unknown_professional_is_404() {
    let app = spawn_app().await;

    let (status, _) = app
        .request(
            "GET",
            &format!("/v1/professionals/{}/schedule", Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn block_creation_reports_warnings() {
    let app = spawn_app().await;
    let base = format!(
        "/v1/professionals/{}/schedule/blocks",
        app.professional_id
    );

    let (status, created) = app
        .request(
            "POST",
            &base,
            Some(json!({
                "start_datetime": "2026-09-07 10:00:00",
                "end_datetime": "2026-09-07 12:00:00",
                "reason": "staff meeting"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["warnings"], json!([]));
    let block_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, listed) = app.request("GET", &base, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"][0]["reason"], json!("staff meeting"));

    let (status, _) = app
        .request("DELETE", &format!("{}/{}", base, block_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn configuration_get_and_partial_put() {
    let app = spawn_app().await;

    let (status, body) = app.request("GET", "/v1/clinic/configuration", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["default_appointment_duration"], json!(30));
    assert_eq!(body["data"]["allow_online_booking"], json!(1));

    let (status, updated) = app
        .request(
            "PUT",
            "/v1/clinic/configuration",
            Some(json!({
                "default_appointment_duration": 45,
                "opening_time_sunday": "10:00",
                "closing_time_sunday": "14:00"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["default_appointment_duration"], json!(45));
    assert_eq!(updated["data"]["opening_time_sunday"], json!("10:00:00"));
    // Untouched days remain as stored.
    assert_eq!(updated["data"]["opening_time_monday"], json!("09:00:00"));
}

#[tokio::test]
async fn invalid_configuration_update_is_400() {
    let app = spawn_app().await;

    let (status, body) = app
        .request(
            "PUT",
            "/v1/clinic/configuration",
            Some(json!({ "opening_time_monday": null })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}
