//! # Monujo (Personal Finance Portal, Sign-in Pages)
//!
//! `monujo` serves the public face of the Monujo personal-finance
//! application: the login, registration, and password-recovery pages.
//!
//! ## Gate-and-Render
//!
//! Every page load resolves the browser session before a single byte of
//! markup is written. Signed-in sessions (positive `user_id`) are redirected
//! to their role's landing page (role 1 = administrator, anything else =
//! standard user); anonymous sessions fall through to the form renderer.
//!
//! ## One-shot flash state
//!
//! Outcome messages and retained field values are written by the
//! authentication backend after a form submission and consumed exactly once
//! by the next render: [`session::SessionStore::take_flash`] returns the
//! page's error message, success message, and retained form data while
//! deleting all three from the session. A refresh or back-navigation never
//! replays an old message.
//!
//! ## One rule table
//!
//! Field validation lives once, in [`forms`]: the server-side `validate`
//! entry point is the authoritative copy, and the script served at
//! `/assets/validate.js` mirrors the same predicates in the browser for
//! immediate feedback. The browser copy is advisory and never a trust
//! boundary.

pub mod cli;
pub mod forms;
pub mod session;
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
