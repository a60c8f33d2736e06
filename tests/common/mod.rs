use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use scolarite_service::{app_router, ensure_schema, open_in_memory, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Router over a fresh in-memory database, plus the pool for tests that
/// seed or inspect storage directly.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = open_in_memory().await.unwrap();
    ensure_schema(&pool).await.unwrap();
    let app = app_router(AppState { pool: pool.clone() });
    (app, pool)
}

/// Drives one request through the router and decodes the JSON body
/// (Null when the response has no body).
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Creates a laboratory through the generic surface and returns its id.
pub async fn create_laboratory(app: &Router, name: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/rest/laboratories",
        Some(serde_json::json!({ "name": name, "contact": "contact@gmail.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Creates a student through the custom controller and returns its id.
pub async fn create_student(app: &Router, name: &str, email: &str, lab_id: Option<i64>) -> i64 {
    let laboratory = match lab_id {
        Some(id) => serde_json::json!({ "id": id }),
        None => Value::Null,
    };
    let (status, body) = request(
        app,
        "POST",
        "/api/students",
        Some(serde_json::json!({
            "name": name,
            "email": email,
            "birthDate": "2000-01-01T00:00:00Z",
            "laboratory": laboratory,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}
