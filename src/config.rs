use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

use crate::metrics::PathLabel;

const DEFAULT_AUTH_USERS: &str = "admin:password123,user:pass456";

/// The three services built from this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Auth,
    Notification,
    Task,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Auth => "auth",
            Service::Notification => "notification",
            Service::Task => "task",
        }
    }

    /// Prefix shared by every metric this service exports.
    pub fn metric_prefix(self) -> &'static str {
        match self {
            Service::Auth => "auth_service",
            Service::Notification => "notification_service",
            Service::Task => "task_service",
        }
    }

    fn default_bind_addr(self) -> SocketAddr {
        let port = match self {
            Service::Auth => 5001,
            Service::Notification => 5002,
            Service::Task => 5000,
        };
        SocketAddr::from(([0, 0, 0, 0], port))
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service: Service,
    pub bind_addr: SocketAddr,
    pub path_label: PathLabel,
    /// username → password, only populated for the auth service.
    pub users: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_env(service: Service) -> Result<Self, String> {
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| format!("BIND_ADDR is not a valid socket address: {}", e))?,
            Err(_) => service.default_bind_addr(),
        };

        let path_label = match env::var("METRICS_PATH_LABEL") {
            Ok(raw) => raw.parse::<PathLabel>()?,
            Err(_) => PathLabel::default(),
        };

        let users = if service == Service::Auth {
            let raw = env::var("AUTH_USERS").unwrap_or_else(|_| DEFAULT_AUTH_USERS.to_string());
            parse_users(&raw)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            service,
            bind_addr,
            path_label,
            users,
        })
    }
}

/// Parse `user:password` pairs separated by commas.
pub fn parse_users(raw: &str) -> Result<HashMap<String, String>, String> {
    let mut users = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (username, password) = entry
            .split_once(':')
            .ok_or_else(|| format!("AUTH_USERS entry '{}' must look like user:password", entry))?;

        if username.is_empty() {
            return Err("AUTH_USERS contains an entry with an empty username".to_string());
        }

        if password.is_empty() {
            return Err(format!("AUTH_USERS entry for '{}' has an empty password", username));
        }

        users.insert(username.to_string(), password.to_string());
    }

    Ok(users)
}
