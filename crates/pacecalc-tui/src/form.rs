//! Input form rendering.

use pacecalc_core::{CalcMode, Field, InputSnapshot, Unit};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

fn field_title(field: Field, unit: Unit) -> String {
    match field {
        Field::Distance => format!(" Distance ({unit}) "),
        Field::PaceMinutes => format!(" Pace minutes (per {unit}) "),
        Field::PaceSeconds => format!(" Pace seconds (per {unit}) "),
        Field::Hours | Field::Minutes | Field::Seconds => format!(" {} ", field.label()),
    }
}

/// Render the mode's visible fields, highlighting the focused one.
#[allow(clippy::cast_possible_truncation)]
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    mode: CalcMode,
    unit: Unit,
    snapshot: &InputSnapshot,
    focus: usize,
) {
    let theme = ColorTheme::default();
    let fields = mode.visible_fields();
    let per_field: u16 = 3;

    for (i, &field) in fields.iter().enumerate() {
        let y = area.y + (i as u16) * per_field;
        if y + per_field > area.y + area.height {
            break;
        }

        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: per_field,
        };

        let border_style = if i == focus {
            theme.focused_style()
        } else {
            theme.border_style()
        };

        let value = snapshot.field(field);
        let paragraph = Paragraph::new(value).style(theme.text_style()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field_title(field, unit)),
        );
        frame.render_widget(paragraph, field_area);
    }
}
