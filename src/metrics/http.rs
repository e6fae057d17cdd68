use axum::{
    extract::{MatchedPath, Request},
    http::{Method, StatusCode},
};
use ::metrics::Unit;
use std::{
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};

use super::MetricsRegistry;

/// Which form of the request path ends up in the `endpoint` label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathLabel {
    /// The path exactly as received.
    #[default]
    Raw,
    /// The matched route template (`/tasks/{id}`), or the raw path when nothing matched.
    Route,
}

impl FromStr for PathLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(PathLabel::Raw),
            "route" => Ok(PathLabel::Route),
            other => Err(format!(
                "METRICS_PATH_LABEL must be 'raw' or 'route', got '{}'",
                other
            )),
        }
    }
}

/// Per-request state captured on entry and consumed once the response is final.
#[derive(Clone, Debug)]
pub struct RequestContext {
    method: Method,
    endpoint: String,
    started: Instant,
}

impl RequestContext {
    pub fn begin(request: &Request, path_label: PathLabel) -> Self {
        let raw = request.uri().path();
        let endpoint = match path_label {
            PathLabel::Raw => raw.to_string(),
            PathLabel::Route => request
                .extensions()
                .get::<MatchedPath>()
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| raw.to_string()),
        };

        Self {
            method: request.method().clone(),
            endpoint,
            started: Instant::now(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// The generic request counter and latency histogram owned by the metrics middleware.
pub struct HttpMetrics {
    registry: Arc<MetricsRegistry>,
    requests_total: String,
    request_duration: String,
    path_label: PathLabel,
}

impl HttpMetrics {
    pub fn new(registry: Arc<MetricsRegistry>, prefix: &str, path_label: PathLabel) -> Self {
        let requests_total = format!("{}_requests_total", prefix);
        let request_duration = format!("{}_request_duration_seconds", prefix);

        registry.describe_counter(
            &requests_total,
            "Total HTTP requests by method, endpoint and status",
        );
        registry.describe_histogram(
            &request_duration,
            Unit::Seconds,
            "HTTP request duration in seconds",
        );

        Self {
            registry,
            requests_total,
            request_duration,
            path_label,
        }
    }

    pub fn path_label(&self) -> PathLabel {
        self.path_label
    }

    /// Record one completed request.
    ///
    /// A request without a context never went through entry
    /// instrumentation; it is skipped rather than treated as an error.
    pub fn observe(&self, context: Option<&RequestContext>, status: StatusCode) {
        let Some(context) = context else {
            tracing::trace!(status = status.as_u16(), "No request context, skipping observation");
            return;
        };

        let method = context.method().to_string();
        let endpoint = context.endpoint().to_string();

        self.registry
            .histogram(
                &self.request_duration,
                &[("method", method.clone()), ("endpoint", endpoint.clone())],
            )
            .record(context.elapsed().as_secs_f64());

        self.registry
            .counter(
                &self.requests_total,
                &[
                    ("method", method),
                    ("endpoint", endpoint),
                    ("status", status.as_u16().to_string()),
                ],
            )
            .increment(1);
    }
}
