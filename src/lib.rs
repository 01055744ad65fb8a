//! HTTPS Fullstack Demo Backend Library

pub mod api;
pub mod config;
pub mod frontend;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
