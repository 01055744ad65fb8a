//! Cross-origin policy.
//!
//! # Responsibilities
//! - Allow exactly the configured frontend origin, with credentials
//! - Leave non-matching origins without CORS headers so the browser
//!   blocks the response (no custom error body)

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::loader::ConfigError;
use crate::config::CorsConfig;

/// Build the CORS layer for the configured origin.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origin: HeaderValue =
        config
            .allowed_origin
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var: "FRONTEND_ORIGIN",
                value: config.allowed_origin.clone(),
                reason: "not a valid header value",
            })?;

    let mut layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_for_default_config() {
        assert!(cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn rejects_unparseable_origin() {
        let config = CorsConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            allow_credentials: true,
        };
        assert!(cors_layer(&config).is_err());
    }
}
