//! The shared rule table for the three auth forms.
//!
//! Rules are declared once per form and consumed twice: [`validate`] is the
//! authoritative server-side pass the auth backend runs on every submission,
//! and the script at `/assets/validate.js` mirrors the same predicates in
//! the browser for immediate feedback.

pub mod rules;

pub use rules::{
    confirm_state, valid_email, valid_login_username, valid_username, ConfirmState, Meter,
    PasswordStrength,
};

use std::collections::HashMap;

/// Which form is being validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    Recover,
}

/// One field rule: predicate plus the message shown when it fails.
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    predicate: fn(&str) -> bool,
}

impl FieldRule {
    #[must_use]
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

fn password_present(password: &str) -> bool {
    !password.is_empty()
}

fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= rules::PASSWORD_MIN
}

static LOGIN_RULES: [FieldRule; 2] = [
    FieldRule {
        field: "username",
        message: "Enter your username.",
        predicate: valid_login_username,
    },
    FieldRule {
        field: "password",
        message: "Enter your password.",
        predicate: password_present,
    },
];

static REGISTER_RULES: [FieldRule; 3] = [
    FieldRule {
        field: "username",
        message: "Usernames are 3-20 letters, digits, '_' or '-'.",
        predicate: valid_username,
    },
    FieldRule {
        field: "email",
        message: "Enter a valid email address.",
        predicate: valid_email,
    },
    FieldRule {
        field: "password",
        message: "Passwords need at least 8 characters.",
        predicate: password_long_enough,
    },
];

static RECOVER_RULES: [FieldRule; 1] = [FieldRule {
    field: "username",
    message: "Usernames are 3-20 letters, digits, '_' or '-'.",
    predicate: valid_username,
}];

/// The rules applying to one form, in display order.
#[must_use]
pub fn rules_for(kind: FormKind) -> &'static [FieldRule] {
    match kind {
        FormKind::Login => &LOGIN_RULES,
        FormKind::Register => &REGISTER_RULES,
        FormKind::Recover => &RECOVER_RULES,
    }
}

/// A failed field with its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Authoritative pass over a submitted form.
///
/// Missing fields are checked as empty strings. Registration additionally
/// requires the confirm field to match the primary password; an empty
/// confirm fails here even though the browser paints it neutral while
/// typing.
#[must_use]
pub fn validate(kind: FormKind, fields: &HashMap<String, String>) -> Vec<FieldError> {
    let value_of = |name: &str| fields.get(name).map(String::as_str).unwrap_or_default();

    let mut errors: Vec<FieldError> = rules_for(kind)
        .iter()
        .filter(|rule| !rule.check(value_of(rule.field)))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message,
        })
        .collect();

    if kind == FormKind::Register
        && confirm_state(value_of("password"), value_of("confirm")) != ConfirmState::Valid
    {
        errors.push(FieldError {
            field: "confirm",
            message: "Passwords do not match.",
        });
    }

    errors
}
