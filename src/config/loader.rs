//! Configuration loading from the process environment.

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Load and validate configuration from the process environment.
///
/// Recognized variables: `PORT`, `APP_ENV`, `FRONTEND_ORIGIN`,
/// `RATE_LIMIT_MAX`, `RATE_LIMIT_WINDOW_SECS`, `MAX_BODY_BYTES`.
/// Unset variables keep their defaults.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Ok(port) = env::var("PORT") {
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            var: "PORT",
            value: port.clone(),
            reason: "expected a port number",
        })?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    if let Ok(environment) = env::var("APP_ENV") {
        config.environment = environment;
    }

    if let Ok(origin) = env::var("FRONTEND_ORIGIN") {
        config.cors.allowed_origin = origin;
    }

    if let Ok(max) = env::var("RATE_LIMIT_MAX") {
        config.rate_limit.max_requests = max.parse().map_err(|_| ConfigError::Invalid {
            var: "RATE_LIMIT_MAX",
            value: max.clone(),
            reason: "expected a request count",
        })?;
    }

    if let Ok(secs) = env::var("RATE_LIMIT_WINDOW_SECS") {
        config.rate_limit.window_secs = secs.parse().map_err(|_| ConfigError::Invalid {
            var: "RATE_LIMIT_WINDOW_SECS",
            value: secs.clone(),
            reason: "expected seconds",
        })?;
    }

    if let Ok(bytes) = env::var("MAX_BODY_BYTES") {
        config.limits.max_body_bytes = bytes.parse().map_err(|_| ConfigError::Invalid {
            var: "MAX_BODY_BYTES",
            value: bytes.clone(),
            reason: "expected a byte count",
        })?;
    }

    validate(&config)?;

    Ok(config)
}

/// Semantic checks that serde-style parsing cannot express.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.cors.allowed_origin.parse::<HeaderValue>().is_err() {
        return Err(ConfigError::Invalid {
            var: "FRONTEND_ORIGIN",
            value: config.cors.allowed_origin.clone(),
            reason: "not a valid header value",
        });
    }

    if config.rate_limit.window_secs == 0 {
        return Err(ConfigError::Invalid {
            var: "RATE_LIMIT_WINDOW_SECS",
            value: "0".to_string(),
            reason: "window must be non-zero",
        });
    }

    Ok(())
}
