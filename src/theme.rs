//! Persisted light/dark theme preference.
//!
//! The preference is read once at startup and written only on toggle.
//! Absence, or anything other than the two literals, means light.

use tracing::{debug, info, warn};

use crate::storage::{PreferenceStore, StorageError};
use crate::surface::ThemeSurface;
use crate::types::ThemePreference;

/// Store key the preference lives under.
pub const THEME_KEY: &str = "theme";

/// Current theme plus the store it persists to.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the persisted preference without writing anything back.
    ///
    /// Read failures are logged and treated as "no preference".
    pub fn load(store: S) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => ThemePreference::from_stored(&value).unwrap_or_else(|| {
                warn!(value = %value, "unrecognized theme preference, using light");
                ThemePreference::Light
            }),
            Ok(None) => ThemePreference::Light,
            Err(e) => {
                warn!(error = %e, "could not read theme preference, using light");
                ThemePreference::Light
            }
        };
        debug!(theme = %current, "theme loaded");
        Self { store, current }
    }

    /// Load the preference and apply it to the surface.
    pub fn apply_on_load(store: S, surface: &mut impl ThemeSurface) -> Self {
        let state = Self::load(store);
        state.apply(surface);
        state
    }

    /// Flip the theme and persist the new literal.
    ///
    /// The in-memory theme flips even when persisting fails; the error is
    /// returned so the caller can report it.
    pub fn toggle(&mut self) -> Result<ThemePreference, StorageError> {
        self.current = self.current.toggled();
        self.store.set(THEME_KEY, self.current.as_str())?;
        info!(theme = %self.current, "theme changed");
        Ok(self.current)
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> ThemeState<S> {
    /// Push the current theme to the surface. Never touches the store.
    pub fn apply(&self, surface: &mut impl ThemeSurface) {
        surface.set_dark_mode(self.current.is_dark());
    }
}

// ============================================================================
// TESTS
// ============================================================================
