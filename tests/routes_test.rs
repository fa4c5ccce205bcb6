// ABOUTME: Route-level tests over the in-memory storage backend
// ABOUTME: Drives the axum router with oneshot requests end to end

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use fitlog_core::models::UserProfile;
use fitlog_server::config::ServerConfig;
use fitlog_server::resources::ServerResources;
use fitlog_server::routes;
use fitlog_server::storage::memory::MemoryStorage;
use fitlog_server::storage::{ProfileStore, Storage, TokenStore};

const TOKEN: &str = "test-token";

/// Router over in-memory storage seeded with alice (70 kg / 170 cm) and a token
async fn test_app() -> Router {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    storage
        .create_profile(&UserProfile::with_measurements("alice", 70.0, 170.0))
        .await
        .unwrap();
    storage.insert_token(TOKEN, "alice").await.unwrap();

    let resources = Arc::new(ServerResources::new(storage, ServerConfig::default()));
    routes::router(resources)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_open() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/user/alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_must_match_path_user() {
    let app = test_app().await;
    let response = app
        .oneshot(request(Method::GET, "/user/bob", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_profile_returns_derived_bmi() {
    let app = test_app().await;
    let response = app
        .oneshot(request(Method::GET, "/user/alice", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["weight_kg"], json!(70.0));
    assert_eq!(body["bmi"], json!(24.22));
}

#[tokio::test]
async fn test_update_profile_validates_bounds() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/user/alice",
            Some(json!({"weight_kg": -5.0, "height_cm": 170.0})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(request(
            Method::PUT,
            "/user/alice",
            Some(json!({"weight_kg": 72.5, "height_cm": 170.0})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["weight_kg"], json!(72.5));
}

#[tokio::test]
async fn test_exercise_log_shifts_profile_weight() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/logs/alice",
            Some(json!({
                "type": "exercise",
                "activity": "Running",
                "duration_minutes": 30.0
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["record"]["entry"]["calories_burnt"], json!(240.0));
    assert_eq!(body["record"]["entry"]["bmi_after"], json!(24.21));
    assert_eq!(body["profile"]["weight_kg"], json!(69.97));

    // The shifted weight is what a follow-up read sees.
    let response = app
        .oneshot(request(Method::GET, "/user/alice", None))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["weight_kg"], json!(69.97));
}

#[tokio::test]
async fn test_log_flow_series_and_recommendations() {
    let app = test_app().await;

    let exercise = json!({"type": "exercise", "activity": "Running", "duration_minutes": 30.0});
    let meal = json!({"type": "meal", "name": "Lunch", "calories_intake": 500.0});
    for payload in [exercise, meal] {
        let response = app
            .clone()
            .oneshot(request(Method::POST, "/logs/alice", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/logs/alice/count", None))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["count"], json!(2));

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/insights/alice/series", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["points"].as_array().unwrap().len(), 2);
    assert_eq!(body["totals"]["entries"], json!(2));
    // Balance: +500 intake - 240 burnt
    assert_eq!(body["totals"]["intake_kcal"], json!(500.0));
    assert_eq!(body["totals"]["burnt_kcal"], json!(240.0));

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/insights/alice/recommendations", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["entries_analyzed"], json!(2));
    assert_eq!(body["calorie_balance_kcal"], json!(260.0));
    assert_eq!(body["balance_advice"], "Your calorie balance is on track!");

    // Delete one entry and confirm the count drops.
    let response = app
        .clone()
        .oneshot(request(Method::GET, "/logs/alice", None))
        .await
        .unwrap();
    let body = json_body(response).await;
    let first_id = body[0]["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(request(
            Method::DELETE,
            "/logs/alice",
            Some(json!({"ids": [first_id]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["deleted"], json!(1));

    let response = app
        .oneshot(request(Method::GET, "/logs/alice/count", None))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["count"], json!(1));
}

#[tokio::test]
async fn test_empty_delete_request_is_invalid() {
    let app = test_app().await;
    let response = app
        .oneshot(request(
            Method::DELETE,
            "/logs/alice",
            Some(json!({"ids": []})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recording_without_measurements_is_rejected() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    storage
        .create_profile(&UserProfile::new("bare"))
        .await
        .unwrap();
    storage.insert_token("bare-token", "bare").await.unwrap();
    let resources = Arc::new(ServerResources::new(storage, ServerConfig::default()));
    let app = routes::router(resources);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/logs/bare")
                .header(header::AUTHORIZATION, "Bearer bare-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"type": "meal", "name": "Lunch", "calories_intake": 500.0}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "MISSING_PROFILE_DATA");

    // Read paths still degrade instead of failing.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/insights/bare/recommendations")
                .header(header::AUTHORIZATION, "Bearer bare-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["bmi_advice"], "No data available for recommendations.");
}
