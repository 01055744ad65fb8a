//! Security response headers.
//!
//! # Responsibilities
//! - Inject a fixed set of standard security headers on every response
//! - Applies to API routes, the client view, and error responses alike
//!
//! # Design Decisions
//! - Headers overwrite anything a handler set under the same name
//! - The set mirrors common hardening defaults (no-sniff, frame denial,
//!   transport security, referrer suppression)

use axum::body::Body;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Middleware that injects the standard security headers.
pub async fn security_headers(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=15552000; includeSubDomains"),
    );
    headers.insert(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(header::X_XSS_PROTECTION, HeaderValue::from_static("0"));
    headers.insert("x-dns-prefetch-control", HeaderValue::from_static("off"));

    response
}
