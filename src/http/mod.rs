//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, dispatch)
//!     → request.rs (add request ID)
//!     → [security middleware] (headers, CORS, rate limit, body limit)
//!     → api handlers / frontend view
//!     → error.rs (404 fallback, generic 500 shape)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
