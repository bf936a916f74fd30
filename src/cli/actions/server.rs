use crate::{
    cli::actions::Action,
    web::{self, PortalConfig},
};
use anyhow::Result;

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn handle(action: Action) -> Result<()> {
    let Action::Server {
        port,
        admin_landing,
        user_landing,
        auth_base,
    } = action;

    let config = PortalConfig::new()
        .with_admin_landing(admin_landing)
        .with_user_landing(user_landing)
        .with_auth_base(auth_base);

    web::new(port, config).await
}
