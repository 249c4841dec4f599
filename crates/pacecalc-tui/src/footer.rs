//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let key = theme.focused_style();
    let text = vec![Line::from(vec![
        Span::styled("tab", key),
        Span::raw(": next field | "),
        Span::styled("m", key),
        Span::raw(": mode | "),
        Span::styled("u", key),
        Span::raw(": unit | "),
        Span::styled("x", key),
        Span::raw(": clear | "),
        Span::styled("e", key),
        Span::raw(": example | "),
        Span::styled("q", key),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
