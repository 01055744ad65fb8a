//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, loaded by main)
//!     → process environment
//!     → loader.rs (read & parse known variables)
//!     → semantic validation (port, origin, window)
//!     → AppConfig (validated, immutable)
//!     → shared with all subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and immutable for the process lifetime
//! - All fields have defaults so an empty environment is runnable
//! - Validation separates syntactic (parse) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::AppConfig;
pub use schema::CorsConfig;
pub use schema::LimitsConfig;
pub use schema::ListenerConfig;
pub use schema::RateLimitConfig;
