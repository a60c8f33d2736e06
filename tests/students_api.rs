//! Custom student controller under /api.

mod common;

use axum::http::StatusCode;
use common::{create_laboratory, create_student, request, test_app};
use serde_json::json;

#[tokio::test]
async fn create_assigns_id_and_roundtrips() {
    let (app, _pool) = test_app().await;
    let lab_id = create_laboratory(&app, "Informatique").await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "name": "Alice",
            "email": "alice@x.com",
            "birthDate": "2000-01-01T00:00:00Z",
            "laboratory": { "id": lab_id },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = request(&app, "GET", &format!("/api/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Alice");
    assert_eq!(fetched["email"], "alice@x.com");
    assert_eq!(fetched["birthDate"], "2000-01-01T00:00:00Z");
    assert_eq!(fetched["laboratory"]["id"], lab_id);
    assert_eq!(fetched["laboratory"]["name"], "Informatique");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_without_laboratory_yields_null_reference() {
    let (app, _pool) = test_app().await;
    let id = create_student(&app, "Alice", "alice@x.com", None).await;

    let (status, fetched) = request(&app, "GET", &format!("/api/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched["laboratory"].is_null());
}

#[tokio::test]
async fn created_ids_are_unique_and_stable() {
    let (app, _pool) = test_app().await;
    let a = create_student(&app, "Alice", "alice@x.com", None).await;
    let b = create_student(&app, "Bob", "bob@x.com", None).await;
    assert_ne!(a, b);

    let (_, first) = request(&app, "GET", &format!("/api/students/{}", a), None).await;
    let (_, second) = request(&app, "GET", &format!("/api/students/{}", a), None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_returns_insertion_order() {
    let (app, _pool) = test_app().await;
    let a = create_student(&app, "Alice", "alice@x.com", None).await;
    let b = create_student(&app, "Bob", "bob@x.com", None).await;
    let c = create_student(&app, "Carol", "carol@x.com", None).await;

    let (status, body) = request(&app, "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[tokio::test]
async fn list_is_empty_array_without_data() {
    let (app, _pool) = test_app().await;
    let (status, body) = request(&app, "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_missing_returns_not_found() {
    let (app, _pool) = test_app().await;
    let (status, body) = request(&app, "GET", "/api/students/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn update_overwrites_and_is_idempotent() {
    let (app, _pool) = test_app().await;
    let id = create_student(&app, "Alice", "alice@x.com", None).await;

    let body = json!({
        "name": "Alicia",
        "email": "alicia@x.com",
        "birthDate": "1999-06-15T00:00:00Z",
    });
    let uri = format!("/api/students/{}", id);
    let (status, updated) = request(&app, "PUT", &uri, Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["name"], "Alicia");

    let (status, again) = request(&app, "PUT", &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, updated);
}

#[tokio::test]
async fn update_forces_id_from_path() {
    let (app, _pool) = test_app().await;
    let id = create_student(&app, "Alice", "alice@x.com", None).await;

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/students/{}", id),
        Some(json!({
            "id": 555,
            "name": "Alicia",
            "email": "alicia@x.com",
            "birthDate": "1999-06-15T00:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64().unwrap(), id);

    let (status, _) = request(&app, "GET", "/api/students/555", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_id_creates_the_record() {
    let (app, _pool) = test_app().await;
    let (status, created) = request(
        &app,
        "PUT",
        "/api/students/99",
        Some(json!({
            "name": "Ghost",
            "email": "ghost@x.com",
            "birthDate": "2001-02-03T00:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"].as_i64().unwrap(), 99);

    let (status, fetched) = request(&app, "GET", "/api/students/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ghost");
}

#[tokio::test]
async fn delete_then_get_returns_not_found() {
    let (app, _pool) = test_app().await;
    let id = create_student(&app, "Alice", "alice@x.com", None).await;
    let uri = format!("/api/students/{}", id);

    let (status, _) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_returns_not_found() {
    let (app, _pool) = test_app().await;
    let (status, body) = request(&app, "DELETE", "/api/students/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn create_with_unknown_laboratory_is_a_conflict() {
    let (app, _pool) = test_app().await;
    let (status, body) = request(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "name": "Alice",
            "email": "alice@x.com",
            "birthDate": "2000-01-01T00:00:00Z",
            "laboratory": { "id": 12345 },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");
}
