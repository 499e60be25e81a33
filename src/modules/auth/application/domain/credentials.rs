use std::sync::LazyLock;

use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const NAME_MAX_LEN: usize = 100;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email pattern")
});

pub fn is_valid_email(email: Option<&str>) -> bool {
    match email {
        Some(email) => EMAIL_PATTERN.is_match(email),
        None => false,
    }
}

pub fn is_valid_password(password: Option<&str>) -> bool {
    match password {
        Some(password) => password.chars().count() >= PASSWORD_MIN_LEN,
        None => false,
    }
}

/// Emails are compared and stored in this form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
