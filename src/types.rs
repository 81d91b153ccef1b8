//! Core types for signup-page.
//!
//! Pure data shared by the validator, the submission protocol and the
//! rendering layer. No I/O lives here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELDS
// ============================================================================

/// The four registration form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in the order they appear on the page.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable identifier ("confirm-password" style).
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }

    /// Human label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the value should be masked when rendered.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// FORM INPUT
// ============================================================================

/// Snapshot of the four field values at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormInput {
    /// Raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Mutable access, used by the page model while the user types.
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Field id → message. A missing entry means the field is valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Outcome of one validation pass.
///
/// Overall validity is derived from the error map rather than stored,
/// so it can never disagree with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: FieldErrors,
}

impl ValidationResult {
    pub fn from_errors(field_errors: FieldErrors) -> Self {
        Self { field_errors }
    }

    /// True iff no field produced a message.
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Message for a field, if it failed.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(&field).copied()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Failing fields with their messages, in display order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.field_errors.iter().map(|(field, msg)| (*field, *msg))
    }
}

// ============================================================================
// THEME
// ============================================================================

/// Persisted colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The literal written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything other than the two literals is None.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_stable() {
        let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["name", "email", "password", "confirm-password"]);
    }

    #[test]
    fn only_password_fields_are_secret() {
        assert!(!Field::Name.is_secret());
        assert!(!Field::Email.is_secret());
        assert!(Field::Password.is_secret());
        assert!(Field::ConfirmPassword.is_secret());
    }

    #[test]
    fn form_input_value_mut_targets_the_right_field() {
        let mut input = FormInput::default();
        input.value_mut(Field::ConfirmPassword).push_str("abc");
        assert_eq!(input.confirm_password, "abc");
        assert_eq!(input.value(Field::ConfirmPassword), "abc");
        assert_eq!(input.value(Field::Password), "");
    }

    #[test]
    fn form_input_deserializes_camel_case_with_missing_fields() {
        let input: FormInput =
            serde_json::from_str(r#"{"name":"Ada","confirmPassword":"x"}"#).unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "");
        assert_eq!(input.confirm_password, "x");
    }

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result.error(Field::Name), None);
    }

    #[test]
    fn result_with_errors_is_invalid() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "bad");
        let result = ValidationResult::from_errors(errors);
        assert!(!result.is_valid());
        assert_eq!(result.error(Field::Email), Some("bad"));
    }

    #[test]
    fn theme_literals_round_trip() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::from_stored(pref.as_str()), Some(pref));
        }
        assert_eq!(ThemePreference::from_stored("Dark"), None);
        assert_eq!(ThemePreference::from_stored(""), None);
    }

    #[test]
    fn theme_toggled_twice_is_identity() {
        let pref = ThemePreference::default();
        assert_eq!(pref, ThemePreference::Light);
        assert_eq!(pref.toggled(), ThemePreference::Dark);
        assert_eq!(pref.toggled().toggled(), pref);
    }
}
