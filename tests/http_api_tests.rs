//! End-to-end tests driving the axum router with an in-memory repository.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use autos_api::db::repositories::LocalRepository;
use autos_api::db::repository::AutoRepository;
use autos_api::http::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Fresh router over an empty in-memory repository; ids start at 1.
fn app() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn AutoRepository>;
    create_router(AppState::new(repo))
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(content) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(content))
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

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|v| v.to_string())).await
}

#[tokio::test]
async fn test_full_crud_scenario() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/autos",
        Some(json!({"marca": "Ford", "modelo": "Focus"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Auto creado"}));

    let (status, body) = send(&app, Method::GET, "/autos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "marca": "Ford", "modelo": "Focus"}));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/autos/1",
        Some(json!({"marca": "Ford", "modelo": "Fiesta"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Auto actualizado"}));

    let (status, body) = send(&app, Method::GET, "/autos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "marca": "Ford", "modelo": "Fiesta"}));

    let (status, body) = send(&app, Method::DELETE, "/autos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Auto eliminado"}));

    let (status, body) = send(&app, Method::GET, "/autos/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Auto no encontrado"}));
}

#[tokio::test]
async fn test_list_returns_all_created_autos() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/autos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for (marca, modelo) in [("Toyota", "Corolla"), ("Seat", "Ibiza")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/autos",
            Some(json!({"marca": marca, "modelo": modelo})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/autos", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    for auto in listed {
        assert!(auto.get("id").and_then(Value::as_i64).is_some());
        assert!(auto.get("marca").and_then(Value::as_str).is_some());
        assert!(auto.get("modelo").and_then(Value::as_str).is_some());
    }
}

#[tokio::test]
async fn test_not_found_consistency() {
    let app = app();
    let expected = json!({"message": "Auto no encontrado"});

    let (status, body) = send(&app, Method::GET, "/autos/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/autos/999",
        Some(json!({"marca": "Ford", "modelo": "Focus"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::DELETE, "/autos/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_delete_missing_id_is_repeatable() {
    let app = app();

    for _ in 0..3 {
        let (status, body) = send(&app, Method::DELETE, "/autos/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Auto no encontrado"}));
    }
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/autos",
        Some(json!({"marca": "Ford"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("message").and_then(Value::as_str).is_some());

    // Nothing was persisted
    let (_, listed) = send(&app, Method::GET, "/autos", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_with_invalid_json_is_rejected() {
    let app = app();

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/autos",
        Some("not a json body".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("message").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn test_create_with_empty_fields_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/autos",
        Some(json!({"marca": "", "modelo": "Focus"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("marca"));
}

#[tokio::test]
async fn test_update_with_malformed_body_is_rejected() {
    let app = app();

    send(
        &app,
        Method::POST,
        "/autos",
        Some(json!({"marca": "Ford", "modelo": "Focus"})),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/autos/1",
        Some(json!({"modelo": "Fiesta"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The row is untouched
    let (_, body) = send(&app, Method::GET, "/autos/1", None).await;
    assert_eq!(body, json!({"id": 1, "marca": "Ford", "modelo": "Focus"}));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}
