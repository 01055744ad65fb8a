//! HTTPS Fullstack Demo (backend)
//!
//! A small demonstration web service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                 DEMO SERVER                   │
//!                   │                                               │
//!   Client Request  │  ┌──────────┐    ┌──────────┐   ┌─────────┐  │
//!   ────────────────┼─▶│ security │───▶│   http   │──▶│   api   │  │
//!                   │  │ headers/ │    │  server  │   │handlers │  │
//!                   │  │cors/rate │    └──────────┘   └────┬────┘  │
//!                   │  └──────────┘                        │       │
//!   Client Response │                                      ▼       │
//!   ◀───────────────┼──────────────────────────────── JSON body    │
//!                   │                                               │
//!                   │  ┌─────────────────────────────────────────┐ │
//!                   │  │          Cross-Cutting Concerns          │ │
//!                   │  │  ┌────────┐ ┌──────────┐ ┌───────────┐  │ │
//!                   │  │  │ config │ │observa-  │ │ lifecycle │  │ │
//!                   │  │  │  (env) │ │ bility   │ │ shutdown  │  │ │
//!                   │  │  └────────┘ └──────────┘ └───────────┘  │ │
//!                   │  └─────────────────────────────────────────┘ │
//!                   └──────────────────────────────────────────────┘
//! ```
//!
//! The same process also serves the single-page client view from `/`.

use tokio::net::TcpListener;

use https_demo::config;
use https_demo::http::HttpServer;
use https_demo::lifecycle::Shutdown;
use https_demo::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenv::dotenv().ok();

    logging::init();

    tracing::info!("https-demo v0.1.0 starting");

    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        environment = %config.environment,
        allowed_origin = %config.cors.allowed_origin,
        rate_limit_max = config.rate_limit.max_requests,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
