//! In-process drivers for service routers.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use tower::ServiceExt;

use crate::{
    auth::UserDirectory,
    metrics::{MetricsRegistry, PathLabel},
    startup::{build_auth_router, build_notification_router, build_task_router},
    state::{AuthState, NotificationState, TaskState},
};

pub fn auth_app() -> (Router, Arc<MetricsRegistry>) {
    let registry = Arc::new(MetricsRegistry::new().unwrap());
    let users = UserDirectory::new(HashMap::from([
        ("admin".to_string(), "password123".to_string()),
        ("user".to_string(), "pass456".to_string()),
    ]));
    let state = Arc::new(AuthState::new(users, registry.clone()));

    (build_auth_router(state, registry.clone(), PathLabel::Raw), registry)
}

pub fn notification_app() -> (Router, Arc<MetricsRegistry>) {
    let registry = Arc::new(MetricsRegistry::new().unwrap());
    let state = Arc::new(NotificationState::new(registry.clone()));

    (build_notification_router(state, registry.clone(), PathLabel::Raw), registry)
}

pub fn task_app() -> (Router, Arc<MetricsRegistry>) {
    let registry = Arc::new(MetricsRegistry::new().unwrap());
    let state = Arc::new(TaskState::new(registry.clone()));

    (build_task_router(state, registry.clone(), PathLabel::Raw), registry)
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Send a request and decode the body as JSON (`Value::Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send_raw(app, method, uri, body).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// GET /metrics through the router, so the scrape itself is observed.
pub async fn scrape(app: &Router) -> String {
    let response = send_raw(app, Method::GET, "/metrics", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}
