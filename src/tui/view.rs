//! Pure rendering: map App state to ratatui widget trees.
//!
//! The page is one scrolling column: title bar, FAQ section, registration
//! form, help line. Widget-building functions are pure (state in, widgets
//! out); the only effect is Frame::render_widget().

use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::types::Field;

use super::state::{App, Focus, Page};
use super::theme::{self, Palette};

/// Character shown in place of each password character.
const MASK: char = '•';

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = theme::palette(app.page.dark_mode);
    let area = frame.area();

    frame.render_widget(Block::new().style(palette.base), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(app, palette), chunks[0]);

    let mut lines = Vec::new();
    lines.extend(faq_lines(app, palette));
    lines.push(Line::from(""));
    lines.extend(form_lines(app, palette));

    let content = Paragraph::new(lines)
        .style(palette.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(content, chunks[1]);

    frame.render_widget(render_help(app.focus, palette), chunks[2]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar: page title on the left, theme toggle icon after it.
fn render_title(app: &App, palette: &Palette) -> Paragraph<'static> {
    let icon_style = if app.focus == Focus::ThemeToggle {
        palette.focus
    } else {
        palette.title
    };

    Paragraph::new(Line::from(vec![
        Span::styled(app.page.title.clone(), palette.title),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", theme::theme_icon(app.page.dark_mode)),
            icon_style,
        ),
    ]))
    .style(palette.base)
}

/// Help line showing the keys that matter for the focused element.
fn render_help(focus: Focus, palette: &Palette) -> Paragraph<'static> {
    let help_text = match focus {
        Focus::ThemeToggle => "[Enter] switch theme  [Tab] next  [Esc] quit",
        Focus::Faq(_) => "[Enter] show/hide answer  [Tab] next  [Esc] quit",
        Focus::Field(_) => "[Enter] submit  [Tab] next  [^T] theme  [Esc] quit",
        Focus::Submit => "[Enter] register  [Tab] next  [Esc] quit",
    };

    Paragraph::new(Span::styled(help_text, palette.muted)).style(palette.base)
}

// ============================================================================
// SECTION: FAQ
// ============================================================================

fn faq_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let page = &app.page;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Frequently Asked Questions", palette.heading)),
    ];

    for (id, entry) in page.faq.iter().enumerate() {
        let open = page.panels.is_open(id);
        let marker = if open { theme::MARKER_OPEN } else { theme::MARKER_CLOSED };
        let style = if app.focus == Focus::Faq(id) {
            palette.focus
        } else {
            palette.label
        };

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} {}", marker, entry.question), style),
        ]));

        if open {
            lines.push(Line::from(Span::styled(
                format!("      {}", entry.answer),
                palette.muted,
            )));
        }
    }

    lines
}

// ============================================================================
// SECTION: FORM
// ============================================================================

fn form_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let page = &app.page;
    let mut lines = vec![Line::from(Span::styled("  Register", palette.heading))];

    for field in Field::ALL {
        let focused = app.focus == Focus::Field(field);
        lines.push(field_line(page, field, focused, palette));

        if let Some(message) = page.error(field) {
            lines.push(Line::from(Span::styled(
                format!("    {}", message),
                palette.error,
            )));
        }
    }

    lines.push(Line::from(""));

    let button_style = if app.focus == Focus::Submit {
        palette.focus
    } else {
        palette.button
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" Register ", button_style),
    ]));

    if let Some(success) = &page.success {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", success), palette.success)));
    }

    lines
}

fn field_line(page: &Page, field: Field, focused: bool, palette: &Palette) -> Line<'static> {
    let value = display_value(page.form.value(field), field);
    let cursor = if focused { "_" } else { "" };
    let input_style = if focused { palette.focus } else { palette.input };

    Line::from(vec![
        Span::styled(format!("  {:<18}", format!("{}:", field.label())), palette.label),
        Span::styled(format!(" {}{} ", value, cursor), input_style),
    ])
}

/// Mask secret fields, one glyph per character.
fn display_value(raw: &str, field: Field) -> String {
    if field.is_secret() {
        std::iter::repeat_n(MASK, raw.chars().count()).collect()
    } else {
        raw.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
