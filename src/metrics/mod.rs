pub mod domain;
pub mod http;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{AuthMetrics, NotificationMetrics, TaskMetrics};
pub use http::{HttpMetrics, PathLabel, RequestContext};
pub use registry::{spawn_upkeep, MetricsRegistry};
