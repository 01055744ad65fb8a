//! Terminal error shaping.
//!
//! # Responsibilities
//! - 404 fallback body for unmatched routes
//! - Convert any handler-level error into the fixed generic 500 shape
//!
//! # Design Decisions
//! - Internal error detail is logged server-side, never echoed to the
//!   caller
//! - No partial responses: conversion happens at the IntoResponse
//!   boundary, after which the body is fully formed

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
        .into_response()
}

/// Handler-level error. Whatever the source, the caller sees the same
/// generic body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request handler failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Something went wrong!" })),
        )
            .into_response()
    }
}
