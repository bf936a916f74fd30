//! Portal configuration and shared request state.

use crate::session::{Role, SessionStore};
use std::sync::Arc;

const DEFAULT_ADMIN_LANDING: &str = "/admin";
const DEFAULT_USER_LANDING: &str = "/dashboard";
const DEFAULT_AUTH_BASE: &str = "/auth";

/// Where the pages send people: landing routes per role and the backend
/// endpoints the forms post to.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    admin_landing: String,
    user_landing: String,
    auth_base: String,
}

impl PortalConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            admin_landing: DEFAULT_ADMIN_LANDING.to_string(),
            user_landing: DEFAULT_USER_LANDING.to_string(),
            auth_base: DEFAULT_AUTH_BASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_admin_landing(mut self, landing: String) -> Self {
        self.admin_landing = landing;
        self
    }

    #[must_use]
    pub fn with_user_landing(mut self, landing: String) -> Self {
        self.user_landing = landing;
        self
    }

    #[must_use]
    pub fn with_auth_base(mut self, base: String) -> Self {
        self.auth_base = base;
        self
    }

    /// Redirect target for a signed-in session.
    #[must_use]
    pub fn landing_for(&self, role: Role) -> &str {
        match role {
            Role::Administrator => &self.admin_landing,
            Role::Standard => &self.user_landing,
        }
    }

    #[must_use]
    pub fn login_action(&self) -> String {
        self.action("login")
    }

    #[must_use]
    pub fn register_action(&self) -> String {
        self.action("register")
    }

    #[must_use]
    pub fn recover_action(&self) -> String {
        self.action("recover")
    }

    fn action(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.auth_base.trim_end_matches('/'))
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state handed to every page handler.
pub struct PortalState {
    config: PortalConfig,
    sessions: Arc<dyn SessionStore>,
}

impl PortalState {
    #[must_use]
    pub fn new(config: PortalConfig, sessions: Arc<dyn SessionStore>) -> Self {
        Self { config, sessions }
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    #[must_use]
    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_follows_role() {
        let config = PortalConfig::new()
            .with_admin_landing("/backoffice".to_string())
            .with_user_landing("/overview".to_string());
        assert_eq!(config.landing_for(Role::Administrator), "/backoffice");
        assert_eq!(config.landing_for(Role::Standard), "/overview");
    }

    #[test]
    fn default_targets() {
        let config = PortalConfig::default();
        assert_eq!(config.landing_for(Role::Administrator), "/admin");
        assert_eq!(config.landing_for(Role::Standard), "/dashboard");
        assert_eq!(config.login_action(), "/auth/login");
        assert_eq!(config.register_action(), "/auth/register");
        assert_eq!(config.recover_action(), "/auth/recover");
    }

    #[test]
    fn action_trims_trailing_slash() {
        let config = PortalConfig::new().with_auth_base("https://auth.monujo.dev/".to_string());
        assert_eq!(config.login_action(), "https://auth.monujo.dev/login");
    }
}
