use std::sync::Arc;

use crate::{
    auth::UserDirectory,
    config::Service,
    metrics::{AuthMetrics, MetricsRegistry, NotificationMetrics, TaskMetrics},
    models::{Notification, Task},
    store::InMemoryStore,
};

pub struct AuthState {
    pub users: UserDirectory,
    pub metrics: AuthMetrics,
}

impl AuthState {
    pub fn new(users: UserDirectory, registry: Arc<MetricsRegistry>) -> Self {
        Self {
            users,
            metrics: AuthMetrics::new(registry, Service::Auth.metric_prefix()),
        }
    }
}

pub struct NotificationState {
    pub notifications: InMemoryStore<Notification>,
    pub metrics: NotificationMetrics,
}

impl NotificationState {
    pub fn new(registry: Arc<MetricsRegistry>) -> Self {
        Self {
            notifications: InMemoryStore::new(),
            metrics: NotificationMetrics::new(registry, Service::Notification.metric_prefix()),
        }
    }
}

pub struct TaskState {
    pub tasks: InMemoryStore<Task>,
    pub metrics: TaskMetrics,
}

impl TaskState {
    pub fn new(registry: Arc<MetricsRegistry>) -> Self {
        Self {
            tasks: InMemoryStore::new(),
            metrics: TaskMetrics::new(registry, Service::Task.metric_prefix()),
        }
    }
}
