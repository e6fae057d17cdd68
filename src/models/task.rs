use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for POST /tasks.
///
/// `title` is required and must not be blank. Only `title` and
/// `description` are stored; any other field in the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTaskInput {
    /// Required, non-blank.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response for task creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskMutationResponse {
    pub message: String,
    pub task: Task,
}
