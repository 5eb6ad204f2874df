use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose shape check: something@something.tld with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True when the value is empty or only whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
