pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod startup;
pub mod state;
pub mod store;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use config::{AppConfig, Service};
pub use error::{AppError, AppResult};
pub use crate::metrics::MetricsRegistry;
