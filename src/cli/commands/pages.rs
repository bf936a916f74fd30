use clap::{Arg, Command};

pub const ARG_ADMIN_LANDING: &str = "admin-landing";
pub const ARG_USER_LANDING: &str = "user-landing";
pub const ARG_AUTH_BASE: &str = "auth-base";

pub const DEFAULT_ADMIN_LANDING: &str = "/admin";
pub const DEFAULT_USER_LANDING: &str = "/dashboard";
pub const DEFAULT_AUTH_BASE: &str = "/auth";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ADMIN_LANDING)
                .long("admin-landing")
                .help("Landing page for signed-in administrator sessions")
                .default_value(DEFAULT_ADMIN_LANDING)
                .env("MONUJO_ADMIN_LANDING"),
        )
        .arg(
            Arg::new(ARG_USER_LANDING)
                .long("user-landing")
                .help("Landing page for signed-in standard-user sessions")
                .default_value(DEFAULT_USER_LANDING)
                .env("MONUJO_USER_LANDING"),
        )
        .arg(
            Arg::new(ARG_AUTH_BASE)
                .long("auth-base")
                .help("Base path of the authentication endpoints the forms post to")
                .long_help(
                    "Base path of the authentication endpoints the forms post to. The login, registration, and recovery forms submit to <auth-base>/login, <auth-base>/register, and <auth-base>/recover.",
                )
                .default_value(DEFAULT_AUTH_BASE)
                .env("MONUJO_AUTH_BASE"),
        )
}
