//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and owns the theme state with its preference store.
//!
//! Single-threaded: each key event runs to completion before the next
//! one is read.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, warn};

use crate::config::PageConfig;
use crate::storage::PreferenceStore;
use crate::theme::ThemeState;

use super::state::{Action, App, Effect, Page, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('s') => Some(Action::Submit),
            _ => None,
        };
    }

    match key.code {
        // Navigation
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Esc => Some(Action::Quit),

        // Editing
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the registration page until the user quits.
///
/// The persisted theme is applied once before the first frame.
pub fn run<S: PreferenceStore>(config: &PageConfig, store: S) -> io::Result<()> {
    let mut app = App::new(Page::from_config(config));
    let mut theme = ThemeState::apply_on_load(store, &mut app.page);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut theme);

    restore_terminal()?;
    result
}

fn event_loop<S: PreferenceStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: &mut ThemeState<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let key = match event::read()? {
            // Ignore key-release events on platforms that report them
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            _ => continue, // mouse, resize, etc.
        };

        let Some(action) = map_key(key) else {
            continue;
        };

        match update(app, &action) {
            Transition::Stay => {}
            Transition::Quit => app.should_quit = true,
            Transition::Effect(effect) => handle_effect(effect, app, theme),
        }
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a pure transition.
pub fn handle_effect<S: PreferenceStore>(effect: Effect, app: &mut App, theme: &mut ThemeState<S>) {
    match effect {
        Effect::ToggleTheme => {
            match theme.toggle() {
                Ok(pref) => debug!(theme = %pref, "theme persisted"),
                Err(e) => warn!(error = %e, "theme changed but could not be saved"),
            }
            theme.apply(&mut app.page);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
