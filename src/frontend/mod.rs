//! Client view.
//!
//! # Responsibilities
//! - Serve the single-page view and its assets from the same process
//!
//! # Design Decisions
//! - Assets are embedded at compile time, so the binary is
//!   self-contained and no filesystem layout matters at runtime
//! - The page calls the API endpoints over the same origin, which keeps
//!   the CORS allowlist relevant only for externally hosted frontends

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::http::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");
const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// Build the client view route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/app.js", get(app_js))
        .route("/style.css", get(style_css))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}
