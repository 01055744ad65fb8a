//! Echo endpoint.
//!
//! Demonstrates request-body parsing: the caller's message comes back with
//! an " (echoed)" suffix. The server never trims whitespace; an absent or
//! empty message yields a fixed placeholder instead.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/echo`. The message field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct EchoRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Echo response. `original` is null when the request carried no message.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub original: Option<String>,
    pub echoed: String,
    pub timestamp: String,
}

impl EchoResponse {
    fn for_message(message: Option<String>) -> Self {
        let echoed = match message.as_deref() {
            Some(m) if !m.is_empty() => format!("{m} (echoed)"),
            _ => "No message provided".to_string(),
        };
        Self {
            original: message,
            echoed,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// `POST /api/echo`
///
/// Always 200 for well-formed JSON bodies; malformed JSON is rejected by
/// the extractor before this handler runs.
pub async fn echo(Json(request): Json<EchoRequest>) -> Json<EchoResponse> {
    Json(EchoResponse::for_message(request.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_non_empty_message() {
        let response = EchoResponse::for_message(Some("hi".to_string()));

        assert_eq!(response.original.as_deref(), Some("hi"));
        assert_eq!(response.echoed, "hi (echoed)");
    }

    #[test]
    fn absent_message_yields_placeholder() {
        let response = EchoResponse::for_message(None);

        assert_eq!(response.original, None);
        assert_eq!(response.echoed, "No message provided");
    }

    #[test]
    fn empty_message_yields_placeholder_but_keeps_original() {
        let response = EchoResponse::for_message(Some(String::new()));

        assert_eq!(response.original.as_deref(), Some(""));
        assert_eq!(response.echoed, "No message provided");
    }

    #[test]
    fn whitespace_is_preserved_verbatim() {
        let response = EchoResponse::for_message(Some("  hi  ".to_string()));

        assert_eq!(response.echoed, "  hi   (echoed)");
    }
}
