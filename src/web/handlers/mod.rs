//! Page handlers and the shared gate-and-render plumbing.

pub mod assets;
pub mod health;
pub mod login;
pub mod recover;
pub mod register;

use crate::session::{Flash, FlashScope, SESSION_COOKIE_NAME};
use crate::web::state::PortalState;
use askama::Template;
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, error};

/// The portal root forwards to the login page.
pub async fn root() -> Redirect {
    Redirect::to("/login")
}

/// Pull the session id out of the `Cookie` header, if any.
fn session_id(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

/// Redirect signed-in sessions to their landing page.
///
/// Runs before any markup is written, while the response headers are still
/// ours to set. Missing cookies and unknown sessions fall through to the
/// form renderer.
fn gate(state: &PortalState, headers: &HeaderMap) -> Result<(), Redirect> {
    let Some(session_id) = session_id(headers) else {
        return Ok(());
    };
    let Some(identity) = state.sessions().identity(&session_id) else {
        return Ok(());
    };
    if identity.is_signed_in() {
        let landing = state.config().landing_for(identity.role());
        debug!("signed-in session, redirecting to {landing}");
        return Err(Redirect::to(landing));
    }
    Ok(())
}

/// Consume the page's one-shot flash state on every load, even when the gate
/// redirects right after; sessionless requests render clean.
fn consume_flash(state: &PortalState, headers: &HeaderMap, scope: FlashScope) -> Flash {
    session_id(headers)
        .map(|sid| state.sessions().take_flash(&sid, scope))
        .unwrap_or_default()
}

/// Render a template or fall back to a bare 500.
fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Failed to render page: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn session_id_parses_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; monujo_session=abc123; lang=eo"),
        );
        assert_eq!(session_id(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn session_id_none_without_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(session_id(&headers), None);
    }

    #[test]
    fn session_id_ignores_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; lang=eo"),
        );
        assert_eq!(session_id(&headers), None);
    }
}
