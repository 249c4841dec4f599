//! Result panel rendering.

use pacecalc_core::display::{format_pace, format_time, RaceStatus};
use pacecalc_core::{race_comparison, speed_from_pace, CalcMode, CalcResult, InputSnapshot};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Build the display lines for a result.
fn result_lines(result: &CalcResult, snapshot: &InputSnapshot, theme: &ColorTheme) -> Vec<Line<'static>> {
    match result {
        CalcResult::Pace {
            minutes,
            seconds,
            unit,
        } => {
            let mut lines = vec![Line::from(Span::styled(
                format!("{} per {unit}", format_pace(*minutes, *seconds)),
                theme.success_style(),
            ))];
            if let Some(speed) = speed_from_pace(*minutes, *seconds, *unit) {
                lines.push(Line::from(format!(
                    "Speed: {speed:.2} {}",
                    unit.speed_label()
                )));
            }
            lines
        }
        CalcResult::Time {
            hours,
            minutes,
            seconds,
        } => {
            let mut lines = vec![Line::from(Span::styled(
                format_time(*hours, *minutes, *seconds),
                theme.success_style(),
            ))];
            if !snapshot.distance.trim().is_empty() {
                lines.push(Line::from(format!("for {} of running", snapshot.distance.trim())));
            }
            lines
        }
        CalcResult::Distance { value, unit } => {
            let mut lines = vec![Line::from(Span::styled(
                format!("{value:.2} {unit}"),
                theme.success_style(),
            ))];
            lines.push(Line::from("Race distances:"));
            for row in race_comparison(*value, *unit) {
                let line = match row.status {
                    RaceStatus::Complete => Line::from(vec![
                        Span::raw(format!("  {:<5} ", row.name)),
                        Span::styled("complete", theme.success_style()),
                    ]),
                    RaceStatus::Deficit(d) => Line::from(vec![
                        Span::raw(format!("  {:<5} ", row.name)),
                        Span::styled(format!("-{d:.1} {unit}"), theme.muted_style()),
                    ]),
                };
                lines.push(line);
            }
            lines
        }
    }
}

/// Render the result panel.
///
/// Shows the derived value only when the validity gate passed AND the
/// engine produced a result; otherwise shows a muted prompt.
pub fn render_result(
    frame: &mut Frame,
    area: Rect,
    mode: CalcMode,
    snapshot: &InputSnapshot,
    result: Option<&CalcResult>,
) {
    let theme = ColorTheme::default();
    let lines = match result {
        Some(result) if snapshot.has_valid_inputs(mode) => result_lines(result, snapshot, &theme),
        _ => vec![Line::from(Span::styled(
            "Enter values to get an instant result",
            theme.muted_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", mode.result_label())),
    );
    frame.render_widget(paragraph, area);
}
