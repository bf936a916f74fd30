//! Server-side session access for the portal pages.
//!
//! The pages only read: identity decides the redirect, flash state fills the
//! banners and retained field values. Both are written by the authentication
//! backend after a form submission; this layer deletes flash state as it
//! reads it so a message is displayed at most once.

mod flash;

pub use flash::{Flash, FlashScope};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Cookie holding the browser's session id.
pub const SESSION_COOKIE_NAME: &str = "monujo_session";

/// Post-login landing selector. Unknown or missing role ids fall back to
/// `Standard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    Standard,
}

impl Role {
    #[must_use]
    pub const fn from_id(id: Option<i64>) -> Self {
        match id {
            Some(1) => Self::Administrator,
            _ => Self::Standard,
        }
    }
}

/// Identity recorded by the auth backend on successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    pub role_id: Option<i64>,
}

impl Identity {
    /// Only a positive `user_id` counts as signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user_id > 0
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        Role::from_id(self.role_id)
    }
}

/// Everything the backend keeps for one browser session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionData {
    pub identity: Option<Identity>,
    pub messages: HashMap<String, String>,
    pub form_data: HashMap<String, String>,
}

/// Session store contract between the pages and the auth backend.
///
/// The pages only call the read side; the write side is what the backend
/// uses after handling a form submission. A shared deployment implements
/// this over its session infrastructure.
pub trait SessionStore: Send + Sync {
    /// Current identity, if the backend recorded a login.
    fn identity(&self, session_id: &str) -> Option<Identity>;

    /// Read and delete the page's flash keys in one step.
    ///
    /// The error key, success key, and retained form data are all removed
    /// even when empty, so a refresh never replays an old message.
    fn take_flash(&self, session_id: &str, scope: FlashScope) -> Flash;

    /// Record a signed-in identity.
    fn set_identity(&self, session_id: &str, identity: Identity);

    /// Store a one-shot message under a flash key.
    fn set_message(&self, session_id: &str, key: &str, value: &str);

    /// Keep submitted field values for the next render.
    fn set_form_data(&self, session_id: &str, fields: HashMap<String, String>);
}

/// In-process session store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: RwLock<HashMap<String, SessionData>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn identity(&self, session_id: &str) -> Option<Identity> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.get(session_id).and_then(|data| data.identity.clone())
    }

    fn take_flash(&self, session_id: &str, scope: FlashScope) -> Flash {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(data) = sessions.get_mut(session_id) else {
            return Flash::default();
        };

        let error = data.messages.remove(scope.error_key()).unwrap_or_default();
        let success = data
            .messages
            .remove(scope.success_key())
            .unwrap_or_default();
        let form_data = std::mem::take(&mut data.form_data);

        Flash {
            error,
            success,
            form_data,
        }
    }

    fn set_identity(&self, session_id: &str, identity: Identity) {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        sessions.entry(session_id.to_string()).or_default().identity = Some(identity);
    }

    fn set_message(&self, session_id: &str, key: &str, value: &str) {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(session_id.to_string())
            .or_default()
            .messages
            .insert(key.to_string(), value.to_string());
    }

    fn set_form_data(&self, session_id: &str, fields: HashMap<String, String>) {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        sessions.entry(session_id.to_string()).or_default().form_data = fields;
    }
}
