//! TUI module for the interactive registration page.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Page, Focus, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Light and dark palettes
//! - `run`: Effects (terminal, event loop, preference store)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
