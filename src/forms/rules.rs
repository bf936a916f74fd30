//! Field predicates shared by the server and the browser mirror.

use regex::Regex;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 8;

/// Login only needs something typed into the username field.
#[must_use]
pub fn valid_login_username(username: &str) -> bool {
    !username.trim().is_empty()
}

/// Account names are 3-20 characters from `[A-Za-z0-9_-]`.
#[must_use]
pub fn valid_username(username: &str) -> bool {
    let length = username.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&length)
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Lightweight email sanity check used before the backend re-validates.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// The three independent checks behind the strength meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
}

impl PasswordStrength {
    #[must_use]
    pub fn measure(password: &str) -> Self {
        Self {
            long_enough: password.chars().count() >= PASSWORD_MIN,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// 0-3, one point per satisfied check.
    #[must_use]
    pub const fn score(self) -> u8 {
        self.long_enough as u8 + self.has_uppercase as u8 + self.has_digit as u8
    }

    #[must_use]
    pub const fn meter(self) -> Meter {
        match self.score() {
            0 | 1 => Meter::Red,
            2 => Meter::Yellow,
            _ => Meter::Green,
        }
    }
}

/// Meter color shown next to the password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meter {
    Red,
    Yellow,
    Green,
}

impl Meter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Live confirm-password status; an empty confirm field stays neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmState {
    Neutral,
    Valid,
    Invalid,
}

#[must_use]
pub fn confirm_state(password: &str, confirm: &str) -> ConfirmState {
    if confirm.is_empty() {
        ConfirmState::Neutral
    } else if confirm == password {
        ConfirmState::Valid
    } else {
        ConfirmState::Invalid
    }
}
