use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub http: HttpConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Delay between a stop request and closing the listener.
    pub shutdown_grace_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_cors: bool,
    pub enable_request_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self::for_environment(environment).with_overrides(lookup)
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // HTTP overrides; HTTP_PORT is the `http.port` setting, PORT is the platform convention
        if let Some(v) = var("HTTP_HOST") {
            self.http.host = v;
        }
        if let Some((key, v)) = var("HTTP_PORT")
            .map(|v| ("HTTP_PORT", v))
            .or_else(|| var("PORT").map(|v| ("PORT", v)))
        {
            self.http.port = v.trim().parse().map_err(|_| {
                ServerError::InvalidConfig(format!("{} must be a port number, got '{}'", key, v))
            })?;
        }
        if let Some(v) = var("HTTP_SHUTDOWN_GRACE_MS") {
            match v.trim().parse() {
                Ok(grace) => self.http.shutdown_grace_ms = grace,
                Err(_) => warn!("Ignoring invalid HTTP_SHUTDOWN_GRACE_MS '{}'", v),
            }
        }

        // API overrides
        if let Some(v) = var("API_ENABLE_CORS") {
            self.api.enable_cors = v.parse().unwrap_or(self.api.enable_cors);
        }
        if let Some(v) = var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        Ok(self)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.http.shutdown_grace_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }

    /// Checks the settings needed to bind a listener from this config.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.http.host.trim().is_empty() {
            return Err(ServerError::InvalidConfig("http.host must not be empty".to_string()));
        }
        if self.http.port == 0 {
            return Err(ServerError::InvalidConfig("http.port must be between 1 and 65535".to_string()));
        }
        Ok(())
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            http: HttpConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                shutdown_grace_ms: 3_000,
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            http: HttpConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                shutdown_grace_ms: 3_000,
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            http: HttpConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                shutdown_grace_ms: 5_000,
            },
            api: ApiConfig {
                enable_cors: false,
                enable_request_logging: false,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}
