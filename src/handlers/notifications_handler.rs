use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    models::{Notification, NotificationList, NotifyInput, NotifyResponse},
    state::NotificationState,
};

/// POST /notify
#[utoipa::path(
    post,
    path = "/notify",
    request_body = NotifyInput,
    responses(
        (status = 200, description = "Notification stored", body = NotifyResponse)
    ),
    tag = "notifications"
)]
pub async fn send_notification(
    State(state): State<Arc<NotificationState>>,
    Json(input): Json<NotifyInput>,
) -> Json<NotifyResponse> {
    let user = input.user.unwrap_or_else(|| "Unknown".to_string());
    let message = input.message.unwrap_or_else(|| "No message".to_string());

    let notification = state
        .notifications
        .append_with(|id| Notification {
            id,
            user,
            message,
            sent_at: Utc::now(),
        })
        .await;

    state.metrics.notification_sent();
    tracing::info!(id = notification.id, user = %notification.user, "Notification sent");

    Json(NotifyResponse {
        status: "Notification sent".to_string(),
        notification,
    })
}

/// GET /notifications
#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (
            status = 200,
            description = "All notifications in the order they were sent",
            body = NotificationList
        )
    ),
    tag = "notifications"
)]
pub async fn get_notifications(
    State(state): State<Arc<NotificationState>>,
) -> Json<NotificationList> {
    let notifications = state.notifications.list().await;

    Json(NotificationList {
        total: notifications.len(),
        notifications,
    })
}
