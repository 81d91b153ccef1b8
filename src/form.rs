//! Registration submission protocol.
//!
//! Wraps the pure validator with the page-level effects: suppress the
//! default submit action, clear stale messages, read fields, then write
//! either per-field errors or the success message back to the surface.

use tracing::{debug, info};

use crate::surface::FormSurface;
use crate::types::{Field, FormInput, ValidationResult};
use crate::validate::validate;

pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// A submit interaction. Its default action is always suppressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Snapshot the surface's current field values.
pub fn read_input(surface: &impl FormSurface) -> FormInput {
    let mut input = FormInput::default();
    for field in Field::ALL {
        *input.value_mut(field) = surface.field_value(field).to_string();
    }
    input
}

/// Clear every error slot and the success slot.
pub fn clear_messages(surface: &mut impl FormSurface) {
    for field in Field::ALL {
        surface.set_field_error(field, None);
    }
    surface.set_success(None);
}

/// Handle one submit: validate and render the outcome onto the surface.
pub fn handle_submit(event: &mut SubmitEvent, surface: &mut impl FormSurface) -> ValidationResult {
    event.prevent_default();
    clear_messages(surface);

    let result = validate(&read_input(&*surface));

    if result.is_valid() {
        surface.set_success(Some(SUCCESS_MESSAGE));
        surface.reset_fields();
        info!("registration accepted");
    } else {
        for (field, message) in result.errors() {
            surface.set_field_error(field, Some(message));
        }
        let failing: Vec<&str> = result.errors().map(|(f, _)| f.id()).collect();
        debug!(fields = ?failing, "registration rejected");
    }

    result
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{EMAIL_REQUIRED, NAME_REQUIRED, PASSWORD_TOO_SHORT};
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FakeSurface {
        values: FormInput,
        errors: BTreeMap<Field, String>,
        success: Option<String>,
    }

    impl FormSurface for FakeSurface {
        fn field_value(&self, field: Field) -> &str {
            self.values.value(field)
        }

        fn set_field_error(&mut self, field: Field, message: Option<&str>) {
            match message {
                Some(m) => {
                    self.errors.insert(field, m.to_string());
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }

        fn set_success(&mut self, message: Option<&str>) {
            self.success = message.map(str::to_string);
        }

        fn reset_fields(&mut self) {
            self.values = FormInput::default();
        }
    }

    fn filled() -> FakeSurface {
        FakeSurface {
            values: FormInput {
                name: "Grace".into(),
                email: "grace@navy.mil".into(),
                password: "cobol!".into(),
                confirm_password: "cobol!".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn submit_always_prevents_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.is_default_prevented());
        handle_submit(&mut event, &mut FakeSurface::default());
        assert!(event.is_default_prevented());

        let mut event = SubmitEvent::new();
        handle_submit(&mut event, &mut filled());
        assert!(event.is_default_prevented());
    }

    #[test]
    fn valid_submit_shows_success_and_clears_fields() {
        let mut surface = filled();
        let result = handle_submit(&mut SubmitEvent::new(), &mut surface);

        assert!(result.is_valid());
        assert_eq!(surface.success.as_deref(), Some(SUCCESS_MESSAGE));
        assert_eq!(surface.values, FormInput::default());
        assert!(surface.errors.is_empty());
    }

    #[test]
    fn invalid_submit_writes_each_message() {
        let mut surface = FakeSurface::default();
        surface.values.password = "abc".into();
        surface.values.confirm_password = "abc".into();

        let result = handle_submit(&mut SubmitEvent::new(), &mut surface);

        assert!(!result.is_valid());
        assert_eq!(surface.errors.get(&Field::Name).map(String::as_str), Some(NAME_REQUIRED));
        assert_eq!(surface.errors.get(&Field::Email).map(String::as_str), Some(EMAIL_REQUIRED));
        assert_eq!(
            surface.errors.get(&Field::Password).map(String::as_str),
            Some(PASSWORD_TOO_SHORT)
        );
        assert!(surface.success.is_none());
        // Fields are kept so the user can correct them.
        assert_eq!(surface.values.password, "abc");
    }

    #[test]
    fn stale_errors_are_cleared_on_next_pass() {
        let mut surface = FakeSurface::default();
        handle_submit(&mut SubmitEvent::new(), &mut surface);
        assert!(!surface.errors.is_empty());

        surface.values = filled().values;
        handle_submit(&mut SubmitEvent::new(), &mut surface);

        assert!(surface.errors.is_empty());
        assert_eq!(surface.success.as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn stale_success_is_cleared_on_failed_pass() {
        let mut surface = filled();
        handle_submit(&mut SubmitEvent::new(), &mut surface);
        assert!(surface.success.is_some());

        // Fields were reset, so the next pass fails.
        handle_submit(&mut SubmitEvent::new(), &mut surface);
        assert!(surface.success.is_none());
        assert_eq!(surface.errors.len(), 3);
    }

    #[test]
    fn resubmitting_emptied_form_matches_first_empty_submit() {
        let mut first = FakeSurface::default();
        let first_result = handle_submit(&mut SubmitEvent::new(), &mut first);

        let mut surface = filled();
        handle_submit(&mut SubmitEvent::new(), &mut surface);
        let again = handle_submit(&mut SubmitEvent::new(), &mut surface);

        assert_eq!(first_result, again);
        assert_eq!(first.errors, surface.errors);
    }

    #[test]
    fn read_input_copies_all_fields() {
        let surface = filled();
        assert_eq!(read_input(&surface), surface.values);
    }
}
