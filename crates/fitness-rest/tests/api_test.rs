//! End-to-end tests of the HTTP surface over in-memory stores.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use fitness_config::ServerConfig;
use fitness_core::{Clock, FixedClock};
use fitness_repository::{
    InMemoryTrainingDao, InMemoryUserDao, TrainingRepository, TrainingRepositoryImpl,
    UserRepository, UserRepositoryImpl,
};
use fitness_rest::{create_router, AppState};
use fitness_service::{TrainingServiceImpl, UserServiceImpl};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let users: Arc<dyn UserRepository> =
        Arc::new(UserRepositoryImpl::new(Arc::new(InMemoryUserDao::new())));
    let trainings: Arc<dyn TrainingRepository> =
        Arc::new(TrainingRepositoryImpl::new(Arc::new(InMemoryTrainingDao::new())));
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::on(
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    ));

    let state = AppState::new(
        Arc::new(UserServiceImpl::new(users.clone(), clock)),
        Arc::new(TrainingServiceImpl::new(trainings, users)),
    );
    create_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ann() -> Value {
    json!({
        "first_name": "Ann",
        "last_name": "K",
        "birthdate": "1990-01-01",
        "email": "ann@x.com"
    })
}

fn run(user_id: i64, day: &str) -> Value {
    json!({
        "user_id": user_id,
        "start_time": format!("{day}T08:00:00Z"),
        "end_time": format!("{day}T09:00:00Z"),
        "activity_type": "RUNNING",
        "distance": 10.0,
        "average_speed": 10.0
    })
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_user_lifecycle() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/v1/users", Some(ann())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/v1/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ann@x.com");

    let mut update = ann();
    update["id"] = json!(999);
    update["first_name"] = json!("Anna");
    let (status, body) = send(&app, "PUT", &format!("/api/v1/users/{id}"), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["first_name"], "Anna");

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/v1/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_user_with_id_is_bad_request() {
    let app = app();
    let mut body = ann();
    body["id"] = json!(4);

    let (status, body) = send(&app, "POST", "/api/v1/users", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_blank_name_reports_field() {
    let app = app();
    let mut body = ann();
    body["first_name"] = json!("  ");

    let (status, body) = send(&app, "POST", "/api/v1/users", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "first_name");
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found_even_with_bad_fields() {
    let app = app();
    let mut blank = ann();
    blank["first_name"] = json!("");

    let (status, body) = send(&app, "PUT", "/api/v1/users/42", Some(blank.clone())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (_, created) = send(&app, "POST", "/api/v1/users", Some(ann())).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let (status, body) = send(&app, "PUT", &format!("/api/v1/users/{id}"), Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"first_name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_user_searches() {
    let app = app();
    send(&app, "POST", "/api/v1/users", Some(ann())).await;

    let (_, body) = send(&app, "GET", "/api/v1/users/search/email?email=ANN", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/v1/users/email?email=ANN@x.com", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, "GET", "/api/v1/users/email?email=ann@x.com", None).await;
    assert_eq!(body["data"][0]["first_name"], "Ann");

    let (_, body) = send(&app, "GET", "/api/v1/users/search/age?age=30", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/v1/users/search/age?age=40", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, "GET", "/api/v1/users/older/1990-01-02", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_parameters_are_bad_requests() {
    let app = app();

    for uri in [
        "/api/v1/users/abc",
        "/api/v1/users/search/age?age=-3",
        "/api/v1/users/older/yesterday",
        "/api/v1/trainings/finished/2023-13-01",
        "/api/v1/trainings/activity-type?activity_type=rowing",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false, "{uri}");
    }
}

#[tokio::test]
async fn test_training_endpoints() {
    let app = app();
    let (_, body) = send(&app, "POST", "/api/v1/users", Some(ann())).await;
    let user_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "POST", "/api/v1/trainings", Some(run(user_id, "2023-01-01"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["email"], "ann@x.com");
    let first = body["data"]["id"].as_i64().unwrap();

    send(&app, "POST", "/api/v1/trainings", Some(run(user_id, "2023-06-01"))).await;

    let (_, body) = send(&app, "GET", "/api/v1/trainings/finished/2023-03-01", None).await;
    let finished = body["data"].as_array().unwrap();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0]["end_time"], "2023-06-01T09:00:00Z");

    let (_, body) = send(&app, "GET", "/api/v1/trainings/activity-type?activity_type=running", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", &format!("/api/v1/trainings/user/{user_id}"), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", &format!("/api/v1/trainings/{first}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activity_type"], "RUNNING");

    let mut update = run(user_id, "2023-01-02");
    update["activity_type"] = json!("SWIMMING");
    let (status, body) = send(&app, "PUT", &format!("/api/v1/trainings/{first}"), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activity_type"], "SWIMMING");

    let (_, body) = send(&app, "GET", "/api/v1/trainings", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_training_for_unknown_user_is_not_found() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/v1/trainings", Some(run(999, "2023-01-01"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/v1/trainings/user/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/v1/trainings", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
