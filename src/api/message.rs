//! Static greeting endpoint.

use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::api::is_secure;

/// Fixed greeting plus transport metadata.
#[derive(Debug, Serialize)]
pub struct MessagePayload {
    pub message: String,
    pub secure: bool,
    pub protocol: String,
}

/// `GET /api/message`
pub async fn message(headers: HeaderMap) -> Json<MessagePayload> {
    let secure = is_secure(&headers);
    Json(MessagePayload {
        message: "Hello from HTTPS Backend!".to_string(),
        secure,
        protocol: if secure { "https" } else { "http" }.to_string(),
    })
}
