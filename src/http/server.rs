//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware in the contract order (request ID, tracing,
//!   timeout, security headers, CORS, rate limiting, body limit)
//! - Bind server to listener and serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::{AppConfig, ConfigError};
use crate::frontend;
use crate::http::error::not_found;
use crate::http::request::set_request_id;
use crate::lifecycle::signals;
use crate::security::cors::cors_layer;
use crate::security::headers::security_headers;
use crate::security::rate_limit::{rate_limit_middleware, RateLimiterState};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Deployment environment label reported by the health endpoint.
    pub environment: String,
}

/// HTTP server for the demo application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let state = AppState {
            environment: config.environment.clone(),
        };
        let limiter = Arc::new(RateLimiterState::new(&config.rate_limit));

        let router = Self::build_router(&config, state, limiter)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added later run earlier, so the chain below reads
    /// innermost-first: handlers, body limit, rate limit, CORS, security
    /// headers, timeout, request ID, trace.
    fn build_router(
        config: &AppConfig,
        state: AppState,
        limiter: Arc<RateLimiterState>,
    ) -> Result<Router, ConfigError> {
        let mut router = Router::new()
            .merge(api::routes())
            .merge(frontend::routes())
            .fallback(not_found)
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes));

        if config.rate_limit.enabled {
            router = router.layer(middleware::from_fn_with_state(
                limiter,
                rate_limit_middleware,
            ));
        }

        Ok(router
            .layer(cors_layer(&config.cors)?)
            .layer(middleware::from_fn(security_headers))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(middleware::from_fn(set_request_id))
            .layer(TraceLayer::new_for_http()))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until an OS shutdown signal arrives or the given receiver
    /// fires, then drains in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown trigger received");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
