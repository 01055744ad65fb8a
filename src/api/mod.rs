//! JSON API endpoints.
//!
//! # Data Flow
//! ```text
//! Request (already passed security middleware)
//!     → health.rs  GET  /api/health   liveness + transport metadata
//!     → message.rs GET  /api/message  fixed greeting
//!     → echo.rs    POST /api/echo     echoes caller-supplied text
//!     → http/error.rs                 404 fallback for anything else
//! ```
//!
//! # Design Decisions
//! - Response models live next to their handlers, one file per endpoint
//! - Handlers are stateless; the only input beyond the request is the
//!   environment label carried in [`AppState`]
//! - Transport security is derived from `X-Forwarded-Proto` because TLS
//!   terminates at the fronting proxy, never in this process

pub mod echo;
pub mod health;
pub mod message;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;

use crate::http::AppState;

/// Build the API route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/message", get(message::message))
        .route("/api/echo", post(echo::echo))
}

/// Whether the request reached the fronting proxy over TLS.
pub(crate) fn is_secure(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}
