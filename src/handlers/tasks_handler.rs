use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    models::{CreateTaskInput, Task, TaskMutationResponse},
    state::TaskState,
    AppError, AppResult,
};

/// GET /tasks
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All tasks in creation order", body = Vec<Task>)
    ),
    tag = "tasks"
)]
pub async fn get_tasks(State(state): State<Arc<TaskState>>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

/// POST /tasks - Create a new task
///
/// Requires a non-blank `title`. Bodies without one are rejected with 422
/// instead of being stored as-is; fields other than `title` and
/// `description` are dropped.
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = CreateTaskInput,
    responses(
        (status = 201, description = "Task added", body = TaskMutationResponse),
        (status = 422, description = "Missing or blank title")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<Arc<TaskState>>,
    Json(input): Json<CreateTaskInput>,
) -> AppResult<(StatusCode, Json<TaskMutationResponse>)> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("Task title must not be empty".to_string()));
    }

    let task = state
        .tasks
        .append_with(|id| Task {
            id,
            title,
            description: input.description,
            created_at: Utc::now(),
        })
        .await;

    state.metrics.task_created();
    tracing::info!(id = task.id, title = %task.title, "Task added");

    Ok((
        StatusCode::CREATED,
        Json(TaskMutationResponse {
            message: "Task added".to_string(),
            task,
        }),
    ))
}
