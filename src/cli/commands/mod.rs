pub mod logging;
pub mod pages;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};
use url::Url;

use self::pages::{ARG_ADMIN_LANDING, ARG_AUTH_BASE, ARG_USER_LANDING};

/// A page target is either an absolute path or an absolute http(s) URL.
fn valid_target(value: &str) -> bool {
    value.starts_with('/')
        || Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Validate the redirect and form targets after parsing.
///
/// # Errors
/// Returns an error string if a landing page or the auth base is neither an
/// absolute path nor an http(s) URL.
pub fn validate(matches: &clap::ArgMatches) -> Result<(), String> {
    for arg in [ARG_ADMIN_LANDING, ARG_USER_LANDING, ARG_AUTH_BASE] {
        if let Some(value) = matches.get_one::<String>(arg) {
            if !valid_target(value) {
                return Err(format!(
                    "--{arg} must be an absolute path or an http(s) URL, got: {value}"
                ));
            }
        }
    }
    Ok(())
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("monujo")
        .about("Personal finance portal, sign-in and account recovery pages")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("MONUJO_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = pages::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "monujo");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Personal finance portal, sign-in and account recovery pages".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_targets() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "monujo",
            "--port",
            "8080",
            "--admin-landing",
            "/backoffice",
            "--user-landing",
            "/overview",
            "--auth-base",
            "https://auth.monujo.dev",
        ]);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
        assert_eq!(
            matches.get_one::<String>(ARG_ADMIN_LANDING).cloned(),
            Some("/backoffice".to_string())
        );
        assert_eq!(
            matches.get_one::<String>(ARG_USER_LANDING).cloned(),
            Some("/overview".to_string())
        );
        assert_eq!(
            matches.get_one::<String>(ARG_AUTH_BASE).cloned(),
            Some("https://auth.monujo.dev".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("MONUJO_PORT", None::<&str>),
                ("MONUJO_ADMIN_LANDING", None),
                ("MONUJO_USER_LANDING", None),
                ("MONUJO_AUTH_BASE", None),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["monujo"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
                assert_eq!(
                    matches.get_one::<String>(ARG_ADMIN_LANDING).map(String::as_str),
                    Some(pages::DEFAULT_ADMIN_LANDING)
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_USER_LANDING).map(String::as_str),
                    Some(pages::DEFAULT_USER_LANDING)
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_AUTH_BASE).map(String::as_str),
                    Some(pages::DEFAULT_AUTH_BASE)
                );
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("MONUJO_PORT", Some("443")),
                ("MONUJO_ADMIN_LANDING", Some("/staff")),
                ("MONUJO_USER_LANDING", Some("/money")),
                ("MONUJO_AUTH_BASE", Some("/api/auth")),
                ("MONUJO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["monujo"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_ADMIN_LANDING).cloned(),
                    Some("/staff".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_USER_LANDING).cloned(),
                    Some("/money".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_AUTH_BASE).cloned(),
                    Some("/api/auth".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("MONUJO_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["monujo"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("MONUJO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["monujo".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_validate_rejects_relative_landing() {
        temp_env::with_vars([("MONUJO_ADMIN_LANDING", None::<&str>)], || {
            let command = new();
            let matches =
                command.get_matches_from(vec!["monujo", "--admin-landing", "backoffice"]);
            assert!(validate(&matches).is_err(), "Should fail relative path");
        });
    }

    #[test]
    fn test_validate_rejects_other_scheme() {
        temp_env::with_vars([("MONUJO_AUTH_BASE", None::<&str>)], || {
            let command = new();
            let matches =
                command.get_matches_from(vec!["monujo", "--auth-base", "ftp://auth.monujo.dev"]);
            assert!(validate(&matches).is_err(), "Should fail non-http scheme");
        });
    }

    #[test]
    fn test_validate_accepts_paths_and_urls() {
        temp_env::with_vars(
            [
                ("MONUJO_ADMIN_LANDING", None::<&str>),
                ("MONUJO_USER_LANDING", None),
                ("MONUJO_AUTH_BASE", None),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec![
                    "monujo",
                    "--admin-landing",
                    "/admin",
                    "--user-landing",
                    "https://app.monujo.dev/dashboard",
                    "--auth-base",
                    "/auth",
                ]);
                assert!(validate(&matches).is_ok());
            },
        );
    }

    #[test]
    fn test_removed_args_fail() {
        let command = new();
        // dsn belongs to the backend services, not the page server
        let result = command
            .clone()
            .try_get_matches_from(vec!["monujo", "--dsn", "postgres://localhost"]);
        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(clap::error::ErrorKind::UnknownArgument)
        );
    }
}
