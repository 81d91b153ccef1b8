//! TUI state algebra: pure types, zero effects.
//!
//! `Page` is the presentation surface the components write into. `App`
//! adds the interaction state (focus, quit flag). The transition function
//! and the rendering layer both program against these types.

use std::collections::BTreeMap;

use crate::config::PageConfig;
use crate::disclosure::{DisclosurePanels, FaqEntry};
use crate::surface::{FormSurface, ThemeSurface};
use crate::types::{Field, FormInput};

// ============================================================================
// PAGE (PRESENTATION SURFACE)
// ============================================================================

/// Everything the view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub faq: Vec<FaqEntry>,
    pub panels: DisclosurePanels,
    /// Current text in each input.
    pub form: FormInput,
    /// Error slot per field; absent = empty slot.
    pub errors: BTreeMap<Field, String>,
    /// Success slot.
    pub success: Option<String>,
    pub dark_mode: bool,
}

impl Page {
    pub fn new(title: impl Into<String>, faq: Vec<FaqEntry>) -> Self {
        let panels = DisclosurePanels::new(faq.len());
        Page {
            title: title.into(),
            faq,
            panels,
            form: FormInput::default(),
            errors: BTreeMap::new(),
            success: None,
            dark_mode: false,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.title.clone(), config.faq.clone())
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl FormSurface for Page {
    fn field_value(&self, field: Field) -> &str {
        self.form.value(field)
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
        self.form = FormInput::default();
    }
}

impl ThemeSurface for Page {
    fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }
}

// ============================================================================
// FOCUS
// ============================================================================

/// The element that receives key input.
///
/// Tab order: theme toggle, FAQ questions, the four fields, submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ThemeToggle,
    Faq(usize),
    Field(Field),
    Submit,
}

impl Focus {
    /// Next element in tab order, wrapping to the theme toggle.
    pub fn next(self, faq_len: usize) -> Focus {
        match self {
            Focus::ThemeToggle if faq_len > 0 => Focus::Faq(0),
            Focus::ThemeToggle => Focus::Field(Field::Name),
            Focus::Faq(i) if i + 1 < faq_len => Focus::Faq(i + 1),
            Focus::Faq(_) => Focus::Field(Field::Name),
            Focus::Field(Field::Name) => Focus::Field(Field::Email),
            Focus::Field(Field::Email) => Focus::Field(Field::Password),
            Focus::Field(Field::Password) => Focus::Field(Field::ConfirmPassword),
            Focus::Field(Field::ConfirmPassword) => Focus::Submit,
            Focus::Submit => Focus::ThemeToggle,
        }
    }

    /// Previous element in tab order, wrapping to the submit button.
    pub fn prev(self, faq_len: usize) -> Focus {
        match self {
            Focus::ThemeToggle => Focus::Submit,
            Focus::Faq(0) => Focus::ThemeToggle,
            Focus::Faq(i) => Focus::Faq(i.min(faq_len).saturating_sub(1)),
            Focus::Field(Field::Name) if faq_len > 0 => Focus::Faq(faq_len - 1),
            Focus::Field(Field::Name) => Focus::ThemeToggle,
            Focus::Field(Field::Email) => Focus::Field(Field::Name),
            Focus::Field(Field::Password) => Focus::Field(Field::Email),
            Focus::Field(Field::ConfirmPassword) => Focus::Field(Field::Password),
            Focus::Submit => Focus::Field(Field::ConfirmPassword),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub page: Page,
    pub focus: Focus,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Start with the first form field focused.
    pub fn new(page: Page) -> Self {
        App {
            page,
            focus: Focus::Field(Field::Name),
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    /// Enter on the focused element.
    Activate,
    /// A printable character.
    Input(char),
    Backspace,
    /// Global shortcut, regardless of focus.
    ToggleTheme,
    /// Global shortcut, regardless of focus.
    Submit,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
///
/// Pure code describes WHAT should happen; the effects boundary decides
/// HOW (here: writing to the preference store).
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Re-render with the updated App.
    Stay,
    Quit,
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Flip and persist the theme preference.
    ToggleTheme,
}

// ============================================================================
// TESTS
// ============================================================================
