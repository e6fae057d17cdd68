use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::{future::Future, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    auth::UserDirectory,
    config::{AppConfig, Service},
    handlers,
    metrics::{spawn_upkeep, HttpMetrics, MetricsRegistry, PathLabel},
    middleware::{request_id_middleware, track_requests},
    openapi,
    state::{AuthState, NotificationState, TaskState},
    telemetry,
};

pub fn build_auth_router(
    state: Arc<AuthState>,
    registry: Arc<MetricsRegistry>,
    path_label: PathLabel,
) -> Router {
    let routes = Router::new()
        .route("/auth/login", post(handlers::auth_handler::login))
        .route("/auth/verify", post(handlers::auth_handler::verify))
        .route("/auth/health", get(handlers::auth_health))
        .with_state(state);

    instrument(Service::Auth, routes, registry, path_label)
}

pub fn build_notification_router(
    state: Arc<NotificationState>,
    registry: Arc<MetricsRegistry>,
    path_label: PathLabel,
) -> Router {
    let routes = Router::new()
        .route("/notify", post(handlers::notifications_handler::send_notification))
        .route("/notifications", get(handlers::notifications_handler::get_notifications))
        .route("/health", get(handlers::notification_health))
        .with_state(state);

    instrument(Service::Notification, routes, registry, path_label)
}

pub fn build_task_router(
    state: Arc<TaskState>,
    registry: Arc<MetricsRegistry>,
    path_label: PathLabel,
) -> Router {
    let routes = Router::new()
        .route(
            "/tasks",
            get(handlers::tasks_handler::get_tasks).post(handlers::tasks_handler::create_task),
        )
        .route("/health", get(handlers::task_health))
        .with_state(state);

    instrument(Service::Task, routes, registry, path_label)
}

/// Build the router for whichever service `config` describes.
pub fn build_service_router(config: &AppConfig, registry: Arc<MetricsRegistry>) -> Router {
    match config.service {
        Service::Auth => {
            let users = UserDirectory::new(config.users.clone());
            if users.is_empty() {
                tracing::warn!("No users configured, every login will be rejected");
            } else {
                tracing::info!(users = users.len(), "User directory loaded");
            }
            let state = Arc::new(AuthState::new(users, registry.clone()));
            build_auth_router(state, registry, config.path_label)
        }
        Service::Notification => {
            let state = Arc::new(NotificationState::new(registry.clone()));
            build_notification_router(state, registry, config.path_label)
        }
        Service::Task => {
            let state = Arc::new(TaskState::new(registry.clone()));
            build_task_router(state, registry, config.path_label)
        }
    }
}

/// Add the routes and layers every service shares around `routes`.
fn instrument(
    service: Service,
    routes: Router,
    registry: Arc<MetricsRegistry>,
    path_label: PathLabel,
) -> Router {
    let http = Arc::new(HttpMetrics::new(
        registry.clone(),
        service.metric_prefix(),
        path_label,
    ));
    let api_doc = openapi::document(service);

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = tracing::field::Empty,
            )
        }))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(middleware::from_fn_with_state(http, track_requests));

    Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(registry)
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(api_doc) }),
        )
        .merge(routes)
        .fallback(handlers::not_found)
        .layer(layers)
}

const UPKEEP_PERIOD: Duration = Duration::from_secs(5);

/// Start one service: load configuration, build its registry and router, serve until
/// Ctrl-C or SIGTERM.
pub async fn run(service: Service) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    telemetry::init_tracing(service)?;

    let config = AppConfig::from_env(service).map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        e
    })?;

    let registry = Arc::new(MetricsRegistry::new().map_err(|e| {
        tracing::error!("Failed to build metrics recorder: {}", e);
        e
    })?);
    tracing::info!(service = service.name(), "Metrics registry initialized");

    let upkeep = spawn_upkeep(registry.clone(), UPKEEP_PERIOD);
    let app = build_service_router(&config, registry);

    let listener = TcpListener::bind(config.bind_addr).await.map_err(|e| {
        tracing::error!(addr = %config.bind_addr, "Failed to bind: {}", e);
        e
    })?;
    tracing::info!(service = service.name(), "Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    upkeep.abort();
    tracing::info!(service = service.name(), "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate_signal() => {}
    }
    tracing::info!("Shutdown signal received");
}

/// Resolves on SIGTERM. The handler is installed when this is called, not when first polled.
#[cfg(unix)]
fn terminate_signal() -> impl Future<Output = ()> {
    use tokio::signal::unix::{signal, SignalKind};

    let terminate = signal(SignalKind::terminate());
    async move {
        match terminate {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(not(unix))]
fn terminate_signal() -> impl Future<Output = ()> {
    std::future::pending()
}
