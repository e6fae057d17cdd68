use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_notifications: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<usize>,
}

impl HealthResponse {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
            total_notifications: None,
            total_tasks: None,
        }
    }
}
