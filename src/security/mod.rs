//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (inject standard security response headers)
//!     → cors.rs (reject cross-origin callers not on the allowlist)
//!     → rate_limit.rs (check per-IP request budget)
//!     → body size limit (tower-http layer, wired in http/server.rs)
//!     → Pass to handlers
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - Rejections use the layer's native body, never handler-shaped JSON
//! - No trust in client input

pub mod cors;
pub mod headers;
pub mod rate_limit;
