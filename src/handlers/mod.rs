pub mod auth_handler;
pub mod health;
pub mod metrics;
pub mod notifications_handler;
pub mod tasks_handler;

use axum::http::Uri;

use crate::AppError;

pub use health::{auth_health, notification_health, task_health};
pub use metrics::metrics_handler;

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
