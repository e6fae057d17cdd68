use utoipa::OpenApi;

use crate::config::Service;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auth Service API",
        version = "1.0.0",
        description = "Login and token verification"
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server"),
    ),
    paths(
        crate::handlers::health::auth_health,
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::verify,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::LoginInput,
            crate::models::LoginResponse,
            crate::models::MessageResponse,
            crate::models::VerifyTokenInput,
            crate::models::VerifyTokenResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Authentication endpoints"),
    )
)]
pub struct AuthApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notification Service API",
        version = "1.0.0",
        description = "In-memory notification log"
    ),
    servers(
        (url = "http://localhost:5002", description = "Local development server"),
    ),
    paths(
        crate::handlers::health::notification_health,
        crate::handlers::notifications_handler::send_notification,
        crate::handlers::notifications_handler::get_notifications,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::Notification,
            crate::models::NotifyInput,
            crate::models::NotifyResponse,
            crate::models::NotificationList,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "notifications", description = "Notification delivery"),
    )
)]
pub struct NotificationApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Service API",
        version = "1.0.0",
        description = "In-memory task tracking"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    paths(
        crate::handlers::health::task_health,
        crate::handlers::tasks_handler::get_tasks,
        crate::handlers::tasks_handler::create_task,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::Task,
            crate::models::CreateTaskInput,
            crate::models::TaskMutationResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "tasks", description = "Task management"),
    )
)]
pub struct TaskApiDoc;

/// OpenAPI document for the given service.
pub fn document(service: Service) -> utoipa::openapi::OpenApi {
    match service {
        Service::Auth => AuthApiDoc::openapi(),
        Service::Notification => NotificationApiDoc::openapi(),
        Service::Task => TaskApiDoc::openapi(),
    }
}
