//! signup-page: Registration page with persisted theme, collapsible FAQ
//! and client-side form validation.

pub mod config;
pub mod disclosure;
pub mod form;
pub mod logging;
pub mod report;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod tui;
pub mod types;
pub mod validate;
