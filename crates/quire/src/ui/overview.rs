use crate::app::App;
use quire_core::{SlideClass, SlideState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 3;

fn cell(class: SlideClass, app: &App) -> Span<'static> {
    let symbol = if class.stack { "▣" } else { "■" };
    let style = match class.state {
        SlideState::Present => Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
        SlideState::Past => Style::default().fg(app.theme.muted),
        SlideState::Future => Style::default().fg(app.theme.text),
    };
    Span::styled(format!("{:<width$}", symbol, width = CELL_WIDTH), style)
}

/// Rows of the overview: horizontal classes on top, stacks hang below
pub(crate) fn overview_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.navigator.state();
    let horizontal = state.horizontal_classes();
    let depth = (0..horizontal.len())
        .map(|h| state.vertical_classes(h).len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from(
        horizontal
            .iter()
            .map(|&class| cell(class, app))
            .collect::<Vec<_>>(),
    )];

    for v in 0..depth {
        let spans = (0..horizontal.len())
            .map(|h| match state.vertical_class(h, v) {
                Some(class) => cell(class, app),
                None => Span::raw(" ".repeat(CELL_WIDTH)),
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    lines
}

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let lines = overview_lines(app);

    let content_width = lines.first().map(|line| line.width()).unwrap_or(0) as u16;
    let popup_width = (content_width + 4).max(14).min(area.width);
    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_x = area.x + (area.width - popup_width) / 2;
    let popup_y = area.y + (area.height - popup_height) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(" Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
