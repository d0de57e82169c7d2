use std::sync::LazyLock;

use regex::Regex;

pub mod config;
pub mod contact;
pub mod nav;
pub mod notify;
pub mod theme;
pub mod timer;

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;

// string validation
//
// deliberately loose: something, an @, something, a dot, something, with no
// whitespace or extra @ anywhere.  the mail service does the real checking
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
