//! TUI header panel.

use pacecalc_core::{CalcMode, Unit};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel with the active mode and unit.
pub fn render_header(frame: &mut Frame, area: Rect, mode: CalcMode, unit: Unit) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("pacecalc", theme.header_style()),
        Span::raw(format!(" | Mode: {mode} | Unit: {unit} | ")),
        Span::styled(mode.description(), theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Running Pace Calculator ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
