//! TUI color palettes for light and dark mode.
//!
//! Pure data — consumed by the rendering layer. Both palettes encode the
//! same semantics so the view never branches on the theme itself:
//! - `error`: field validation messages
//! - `success`: registration accepted
//! - `focus`: the element that receives key input
//! - `muted`: help line, placeholders, collapsed markers

use ratatui::style::{Color, Modifier, Style};

/// Glyph for the theme toggle while in light mode (offers dark).
pub const ICON_LIGHT: &str = "☾";

/// Glyph for the theme toggle while in dark mode (offers light).
pub const ICON_DARK: &str = "☀";

/// Marker for a collapsed FAQ entry.
pub const MARKER_CLOSED: &str = "▸";

/// Marker for an expanded FAQ entry.
pub const MARKER_OPEN: &str = "▾";

/// One complete set of styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Style,
    pub title: Style,
    pub heading: Style,
    pub label: Style,
    pub input: Style,
    pub focus: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub button: Style,
}

pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    heading: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::Black),
    input: Style::new().fg(Color::Black).bg(Color::Gray),
    focus: Style::new().fg(Color::White).bg(Color::Blue),
    error: Style::new().fg(Color::Red),
    success: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::DarkGray),
    button: Style::new().fg(Color::White).bg(Color::DarkGray),
};

pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::White).bg(Color::Black),
    title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    heading: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::Gray),
    input: Style::new().fg(Color::White).bg(Color::DarkGray),
    focus: Style::new().fg(Color::Black).bg(Color::Cyan),
    error: Style::new().fg(Color::LightRed),
    success: Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::Gray),
    button: Style::new().fg(Color::Black).bg(Color::Gray),
};

/// Palette for the current mode.
pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode { &DARK } else { &LIGHT }
}

/// Toggle glyph for the current mode.
pub fn theme_icon(dark_mode: bool) -> &'static str {
    if dark_mode { ICON_DARK } else { ICON_LIGHT }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_in_background() {
        assert_eq!(LIGHT.base.bg, Some(Color::White));
        assert_eq!(DARK.base.bg, Some(Color::Black));
    }

    #[test]
    fn palette_selects_by_mode() {
        assert_eq!(palette(false), &LIGHT);
        assert_eq!(palette(true), &DARK);
    }

    #[test]
    fn icon_swaps_between_moon_and_sun() {
        assert_eq!(theme_icon(false), ICON_LIGHT);
        assert_eq!(theme_icon(true), ICON_DARK);
    }

    #[test]
    fn success_style_is_bold() {
        assert!(LIGHT.success.add_modifier.contains(Modifier::BOLD));
        assert!(DARK.success.add_modifier.contains(Modifier::BOLD));
    }
}
