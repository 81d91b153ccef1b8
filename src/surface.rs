//! Presentation surface seams.
//!
//! Components never reach for global UI state; the host hands them a
//! surface. The TUI page model implements both traits, and tests can
//! substitute any plain struct.

use crate::types::Field;

/// What the submission protocol needs from the page.
pub trait FormSurface {
    /// Current raw value of a field.
    fn field_value(&self, field: Field) -> &str;

    /// Set or clear (`None`) the error slot next to a field.
    fn set_field_error(&mut self, field: Field, message: Option<&str>);

    /// Set or clear (`None`) the success slot.
    fn set_success(&mut self, message: Option<&str>);

    /// Empty every field.
    fn reset_fields(&mut self);
}

/// What the theme component needs from the page.
pub trait ThemeSurface {
    fn set_dark_mode(&mut self, dark: bool);
}
