use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{data::student::StudentRepository, router::router, state::AppState};


/// Builds the full router over a freshly migrated in-memory database.
async fn app() -> (DatabaseConnection, Router) {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.unwrap();
    let app = router().with_state(AppState::new(db.clone()));

    (db, app)
}

/// Sends a request with an optional raw body and returns status and body bytes.
async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Bytes) {
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
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes)
}

/// Sends a JSON request and parses the JSON response, `Null` for an empty body.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|json| json.to_string());
    let (status, bytes) = send_raw(app, method, uri, body.as_deref()).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
