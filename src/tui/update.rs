//! Pure state transitions: (App, Action) → Transition.
//!
//! This is the interaction logic of the TUI. Fully testable without a
//! terminal. The only requested side effect is persisting the theme;
//! FAQ toggles and form submission mutate the page model directly.

use crate::form::{handle_submit, SubmitEvent};

use super::state::{Action, App, Effect, Focus, Transition};

/// Apply one action to the app.
pub fn update(app: &mut App, action: &Action) -> Transition {
    let faq_len = app.page.faq.len();

    match action {
        Action::Quit => Transition::Quit,
        Action::FocusNext => {
            app.focus = app.focus.next(faq_len);
            Transition::Stay
        }
        Action::FocusPrev => {
            app.focus = app.focus.prev(faq_len);
            Transition::Stay
        }
        Action::ToggleTheme => Transition::Effect(Effect::ToggleTheme),
        Action::Submit => submit(app),
        Action::Activate => activate(app),
        Action::Input(c) => input(app, *c),
        Action::Backspace => {
            if let Focus::Field(field) = app.focus {
                app.page.form.value_mut(field).pop();
            }
            Transition::Stay
        }
    }
}

// ============================================================================
// PER-FOCUS HANDLERS
// ============================================================================

/// Enter: toggle the focused control, or submit from a field / the button.
fn activate(app: &mut App) -> Transition {
    match app.focus {
        Focus::ThemeToggle => Transition::Effect(Effect::ToggleTheme),
        Focus::Faq(id) => {
            app.page.panels.toggle(id);
            Transition::Stay
        }
        Focus::Field(_) | Focus::Submit => submit(app),
    }
}

/// Printable character: edit a field, or act like Enter on space.
fn input(app: &mut App, c: char) -> Transition {
    match app.focus {
        Focus::Field(field) => {
            app.page.form.value_mut(field).push(c);
            Transition::Stay
        }
        _ if c == ' ' => activate(app),
        _ => Transition::Stay,
    }
}

fn submit(app: &mut App) -> Transition {
    let mut event = SubmitEvent::new();
    handle_submit(&mut event, &mut app.page);
    Transition::Stay
}

// ============================================================================
// TESTS
// ============================================================================
