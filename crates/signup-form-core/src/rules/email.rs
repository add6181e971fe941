//! Email address shape check

use regex::Regex;
use std::sync::OnceLock;

/// Anchored `local@domain.tld` shape; no whitespace or extra `@` anywhere
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Check that a value looks like an email address
pub fn is_email_shape(value: &str) -> bool {
    email_regex().is_match(value)
}
