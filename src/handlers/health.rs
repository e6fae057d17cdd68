use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    config::Service,
    models::HealthResponse,
    state::{NotificationState, TaskState},
};

#[utoipa::path(
    get,
    path = "/auth/health",
    responses(
        (status = 200, description = "Health check OK", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn auth_health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(Service::Auth.name()))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check OK", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn notification_health(
    State(state): State<Arc<NotificationState>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        total_notifications: Some(state.notifications.len().await),
        ..HealthResponse::healthy(Service::Notification.name())
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check OK", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn task_health(State(state): State<Arc<TaskState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        total_tasks: Some(state.tasks.len().await),
        ..HealthResponse::healthy(Service::Task.name())
    })
}
