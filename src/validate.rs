//! Registration form validation.
//!
//! Pure functions — no I/O, no state carried between calls.
//! Every input, including all-empty strings, yields a well-defined result.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Field, FieldErrors, FormInput, ValidationResult};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Minimum password length, in UTF-16 code units. Whitespace counts.
///
/// Characters outside the BMP count as two units, matching how browser
/// form fields report length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Byte order mark. Browsers treat it as whitespace; `char::is_whitespace`
/// does not.
const BOM: char = '\u{FEFF}';

/// `local@domain.tld`: no whitespace or '@' in any part, and a literal dot
/// before a final non-empty segment.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern is a valid regex")
});

/// Validate all four fields independently.
///
/// All rules run regardless of earlier failures, so several messages can
/// surface from a single call.
pub fn validate(input: &FormInput) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let checks = [
        (Field::Name, check_name(&input.name)),
        (Field::Email, check_email(&input.email)),
        (Field::Password, check_password(&input.password)),
        (
            Field::ConfirmPassword,
            check_confirm_password(&input.password, &input.confirm_password),
        ),
    ];

    for (field, message) in checks {
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }

    ValidationResult::from_errors(errors)
}

/// Check whether a string matches the email pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ============================================================================
// INTERNAL: per-field rules
// ============================================================================

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .is_empty()
}

fn check_name(name: &str) -> Option<&'static str> {
    is_blank(name).then_some(NAME_REQUIRED)
}

fn check_email(email: &str) -> Option<&'static str> {
    if is_blank(email) {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        // The pattern is tested against the raw value, so surrounding
        // whitespace makes an otherwise valid address fail.
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<&'static str> {
    (password.encode_utf16().count() < MIN_PASSWORD_LEN).then_some(PASSWORD_TOO_SHORT)
}

fn check_confirm_password(password: &str, confirm: &str) -> Option<&'static str> {
    (password != confirm).then_some(PASSWORDS_DO_NOT_MATCH)
}

// ============================================================================
// TESTS
// ============================================================================
