use crate::cli::{actions::Action, commands, commands::pages};
use anyhow::Result;

/// Turn parsed arguments into an action.
///
/// # Errors
/// Returns an error if the page targets fail validation.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    commands::validate(matches).map_err(|err| anyhow::anyhow!(err))?;

    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        admin_landing: matches
            .get_one::<String>(pages::ARG_ADMIN_LANDING)
            .cloned()
            .unwrap_or_else(|| pages::DEFAULT_ADMIN_LANDING.to_string()),
        user_landing: matches
            .get_one::<String>(pages::ARG_USER_LANDING)
            .cloned()
            .unwrap_or_else(|| pages::DEFAULT_USER_LANDING.to_string()),
        auth_base: matches
            .get_one::<String>(pages::ARG_AUTH_BASE)
            .cloned()
            .unwrap_or_else(|| pages::DEFAULT_AUTH_BASE.to_string()),
    })
}
