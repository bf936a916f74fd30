//! Password recovery page.

use super::{consume_flash, gate, render};
use crate::session::FlashScope;
use crate::web::state::PortalState;
use askama::Template;
use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[derive(Template)]
#[template(path = "recover.html")]
struct RecoverPage {
    action: String,
    error: String,
    success: String,
    username: String,
}

/// `GET /recover`
pub async fn page(headers: HeaderMap, state: Extension<Arc<PortalState>>) -> Response {
    let mut flash = consume_flash(&state, &headers, FlashScope::Recover);

    if let Err(redirect) = gate(&state, &headers) {
        return redirect.into_response();
    }

    render(RecoverPage {
        action: state.config().recover_action(),
        error: flash.error,
        success: flash.success,
        username: flash.form_data.remove("username").unwrap_or_default(),
    })
}
