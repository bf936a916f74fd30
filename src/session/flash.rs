//! One-shot flash state carried across the post-submit redirect.

use std::collections::HashMap;

/// Selects which page's flash keys a render consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashScope {
    Login,
    Register,
    Recover,
}

impl FlashScope {
    /// Session key holding the page's error message.
    #[must_use]
    pub const fn error_key(self) -> &'static str {
        match self {
            Self::Login => "login_error",
            Self::Register => "register_error",
            Self::Recover => "recover_error",
        }
    }

    /// Session key holding the page's success message.
    #[must_use]
    pub const fn success_key(self) -> &'static str {
        match self {
            Self::Login => "login_success",
            Self::Register => "register_success",
            Self::Recover => "recover_success",
        }
    }
}

/// Values consumed from the session for a single render.
///
/// Absent keys come back as empty string / empty map, never as an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flash {
    pub error: String,
    pub success: String,
    pub form_data: HashMap<String, String>,
}
