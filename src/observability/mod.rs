//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; per-request spans come
//!   from the trace layer in http/server.rs
//! - Log level configurable through `RUST_LOG`, with a sensible default
//! - No metrics endpoint: the demo exposes no observability surface

pub mod logging;
