//! Service-specific counters, incremented by route logic rather than the middleware.

use std::sync::Arc;

use super::MetricsRegistry;

pub struct AuthMetrics {
    registry: Arc<MetricsRegistry>,
    login_attempts: String,
    token_verifications: String,
}

impl AuthMetrics {
    pub fn new(registry: Arc<MetricsRegistry>, prefix: &str) -> Self {
        let login_attempts = format!("{}_login_attempts_total", prefix);
        let token_verifications = format!("{}_token_verifications_total", prefix);

        registry.describe_counter(&login_attempts, "Login attempts by outcome");
        registry.describe_counter(&token_verifications, "Token verifications by outcome");

        Self {
            registry,
            login_attempts,
            token_verifications,
        }
    }

    pub fn login_attempt(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.registry
            .counter(&self.login_attempts, &[("outcome", outcome.to_string())])
            .increment(1);
    }

    pub fn token_verification(&self, valid: bool) {
        let outcome = if valid { "valid" } else { "invalid" };
        self.registry
            .counter(&self.token_verifications, &[("outcome", outcome.to_string())])
            .increment(1);
    }
}

pub struct NotificationMetrics {
    registry: Arc<MetricsRegistry>,
    sent: String,
}

impl NotificationMetrics {
    pub fn new(registry: Arc<MetricsRegistry>, prefix: &str) -> Self {
        let sent = format!("{}_notifications_sent_total", prefix);
        registry.describe_counter(&sent, "Total number of notifications sent");

        Self { registry, sent }
    }

    pub fn notification_sent(&self) {
        self.registry.counter(&self.sent, &[]).increment(1);
    }
}

pub struct TaskMetrics {
    registry: Arc<MetricsRegistry>,
    created: String,
}

impl TaskMetrics {
    pub fn new(registry: Arc<MetricsRegistry>, prefix: &str) -> Self {
        let created = format!("{}_tasks_total", prefix);
        registry.describe_counter(&created, "Total number of tasks created");

        Self { registry, created }
    }

    pub fn task_created(&self) {
        self.registry.counter(&self.created, &[]).increment(1);
    }
}
