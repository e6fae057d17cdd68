use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: u64,
    pub user: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Input for POST /notify
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NotifyInput {
    pub message: Option<String>,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotifyResponse {
    pub status: String,
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationList {
    pub total: usize,
    pub notifications: Vec<Notification>,
}
