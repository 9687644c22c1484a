use crate::app::App;
use quire_core::Control;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Columns taken by the four arrows ("◀ ▲ ▼ ▶")
pub const CONTROLS_WIDTH: u16 = 7;

fn glyph(control: Control) -> &'static str {
    match control {
        Control::Left => "◀",
        Control::Up => "▲",
        Control::Down => "▼",
        Control::Right => "▶",
    }
}

/// Draw the arrows right-aligned in `row` and record their hit areas
pub fn draw(frame: &mut Frame, app: &mut App, row: Rect) {
    if row.width < CONTROLS_WIDTH || row.height == 0 {
        return;
    }

    let routes = app.routes();
    let start_x = row.x + row.width - CONTROLS_WIDTH;

    for (i, control) in Control::ALL.into_iter().enumerate() {
        let area = Rect::new(start_x + (i as u16) * 2, row.y, 1, 1);
        let style = if control.enabled(&routes) {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.disabled())
        };
        frame.render_widget(Span::styled(glyph(control), style), area);
        app.control_areas.push((control, area));
    }
}
