// Passify form view models
// One statically-typed struct per screen, each field an explicit named
// member. validate() checks the screen's rules in a fixed order and
// returns the request payload on success, so no request is ever built
// from an invalid form.

pub mod auth;
pub mod entry;
pub mod profile;

use std::sync::OnceLock;

use regex::Regex;

/// Address pattern shared by every form that accepts an email.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// True when `email` matches the accepted address pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
        .is_match(email)
}
