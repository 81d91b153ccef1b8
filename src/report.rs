//! Report formatting for validation results.
//!
//! Pure functions — (ValidationResult, OutputFormat) → String.
//! No I/O, no side effects.

use serde_json::json;

use crate::form::SUCCESS_MESSAGE;
use crate::types::{OutputFormat, ValidationResult};

/// Format a validation result for output.
pub fn format_result(result: &ValidationResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(result),
        OutputFormat::Json => format_json(result),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(result: &ValidationResult) -> String {
    if result.is_valid() {
        return format!("{}\n", SUCCESS_MESSAGE);
    }

    let mut out = String::new();
    for (field, message) in result.errors() {
        out.push_str(&format!("{}: {}\n", field.id(), message));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(result: &ValidationResult) -> String {
    // Field serializes as its camelCase variant name, so the map keys come
    // out as "name", "email", "password", "confirmPassword".
    let value = json!({
        "valid": result.is_valid(),
        "fieldErrors": result.field_errors(),
    });

    serde_json::to_string_pretty(&value).expect("json Value always serializes")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormInput;
    use crate::validate::{validate, PASSWORDS_DO_NOT_MATCH};
    use serde_json::Value;

    fn mismatched() -> ValidationResult {
        validate(&FormInput {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        })
    }

    #[test]
    fn human_valid_prints_success() {
        let out = format_result(&ValidationResult::default(), OutputFormat::Human);
        assert_eq!(out, "Registration successful!\n");
    }

    #[test]
    fn human_lists_failing_fields_by_id() {
        let out = format_result(&mismatched(), OutputFormat::Human);
        assert_eq!(out, format!("confirm-password: {}\n", PASSWORDS_DO_NOT_MATCH));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let out = format_result(&mismatched(), OutputFormat::Json);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["valid"], Value::Bool(false));
        assert_eq!(value["fieldErrors"]["confirmPassword"], PASSWORDS_DO_NOT_MATCH);
        assert!(value["fieldErrors"].get("name").is_none());
    }

    #[test]
    fn json_valid_has_empty_errors() {
        let out = format_result(&ValidationResult::default(), OutputFormat::Json);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["valid"], Value::Bool(true));
        assert_eq!(value["fieldErrors"], json!({}));
    }

    #[test]
    fn empty_form_lists_three_fields_in_order() {
        let out = format_result(&validate(&FormInput::default()), OutputFormat::Human);
        let fields: Vec<&str> = out.lines().map(|l| l.split(':').next().unwrap()).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
    }
}
