//! UI rendering for the TUI

mod controls;
mod overview;

use crate::app::App;
use quire_core::Group;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub use controls::CONTROLS_WIDTH;

/// Main drawing function
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.control_areas.clear();

    if app.zen_mode {
        draw_slide(frame, app, frame.area());
    } else if app.status_bar_visible {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Slide
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        draw_slide(frame, app, chunks[0]);
        draw_status_bar(frame, app, chunks[1]);
    } else {
        let area = frame.area();
        draw_slide(frame, app, area);
        if app.controls_visible && area.height > 0 {
            let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            controls::draw(frame, app, row);
        }
    }

    if app.prompt.is_some() && (app.zen_mode || !app.status_bar_visible) {
        let area = frame.area();
        if area.height > 0 {
            let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            frame.render_widget(Clear, row);
            frame.render_widget(Paragraph::new(prompt_line(app)), row);
        }
    }

    if app.show_overview {
        overview::draw(frame, app);
    }

    if app.show_help {
        draw_help_popover(frame, app);
    }
}

fn draw_slide(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = app.slide_layout(area);
    let fragment = app.navigator.fragment();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title_bottom(Line::from(format!(" {} ", fragment)).right_aligned());
    let inner = block.inner(layout.frame);
    frame.render_widget(block, layout.frame);

    let Some(slide) = app.navigator.current_slide() else {
        let empty = Paragraph::new("Empty deck")
            .style(Style::default().fg(app.theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    };

    let top = layout.content_top.min(inner.height);
    let body_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
    let body = Paragraph::new(slide.content.as_str())
        .style(Style::default().fg(app.theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, body_area);
}

fn prompt_line(app: &App) -> Line<'static> {
    let text = app.prompt.clone().unwrap_or_default();
    Line::from(vec![
        Span::styled(":", Style::default().fg(app.theme.accent)),
        Span::styled(text, Style::default().fg(app.theme.text)),
    ])
}

fn draw_status_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let controls_width = if app.controls_visible { CONTROLS_WIDTH + 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(controls_width)])
        .split(area);

    if app.prompt.is_some() {
        frame.render_widget(Paragraph::new(prompt_line(app)), chunks[0]);
    } else {
        frame.render_widget(Paragraph::new(status_line(app)), chunks[0]);
    }

    if app.controls_visible {
        controls::draw(frame, app, chunks[1]);
    }
}

fn status_line(app: &App) -> Line<'static> {
    let nav = &app.navigator;
    let position = nav.position();
    let muted = Style::default().fg(app.theme.muted);
    let text = Style::default().fg(app.theme.text);

    let title = nav
        .current_slide()
        .and_then(|slide| slide.title())
        .unwrap_or("")
        .to_string();

    let mut spans = vec![
        Span::styled(
            " QUIRE ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", app.deck_name), muted),
    ];

    if nav.horizontal_count() > 0 {
        spans.push(Span::styled(
            format!("{}/{}", position.h + 1, nav.horizontal_count()),
            text,
        ));
        if let Some(Group::Stack(slides)) = nav.grid().group(position.h) {
            spans.push(Span::styled(
                format!(" ↕ {}/{}", position.v + 1, slides.len()),
                text,
            ));
        }
    }

    if !title.is_empty() {
        spans.push(Span::styled("  ", muted));
        spans.push(Span::styled(title, muted));
    }

    Line::from(spans)
}

fn draw_help_popover(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let popup_width = 40u16.min(area.width.saturating_sub(4));
    let popup_height = 17u16.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(app.theme.accent);
    let label_style = Style::default().fg(app.theme.text);
    let section_style = Style::default().fg(app.theme.muted);

    let help_line = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::styled(desc.to_string(), label_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(" Navigation", section_style)),
        help_line("h / l / ←→", "Previous/next topic"),
        help_line("k / j / ↑↓", "Up/down the stack"),
        help_line("g / Home", "First slide"),
        help_line("G / End", "Last slide"),
        help_line("3l", "Repeat a move"),
        help_line(":", "Go to #/h/v"),
        help_line("click", "Arrows navigate"),
        Line::from(""),
        Line::from(Span::styled(" View", section_style)),
        help_line("o", "Grid overview"),
        help_line("Z", "Zen mode"),
        help_line("?", "Toggle help"),
        help_line("q / Esc", "Quit"),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
mod tests;
