//! Static assets served to the pages.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

const VALIDATE_JS: &str = include_str!("../../../assets/validate.js");

/// Advisory browser mirror of the form rules.
pub async fn validate_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], VALIDATE_JS)
}
