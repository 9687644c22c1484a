use super::overview::overview_lines;
use crate::app::App;
use crate::config::Config;
use quire_core::{parse_text_deck, Control};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

const DECK: &str = "# Intro\n---\n# Topic\n--\n# Detail\n---\n# Outro\n";

fn make_app(config: &Config) -> App {
    let mut app = App::new(parse_text_deck(DECK), "talk.md".to_string(), config);
    app.initialize(None);
    app
}

fn render_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| super::draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn buffer_text(buf: &Buffer) -> Vec<String> {
    let mut lines = Vec::new();
    for y in 0..buf.area.height {
        let mut line = String::new();
        for x in 0..buf.area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines
}

#[test]
fn test_renders_current_slide_and_status() {
    let mut app = make_app(&Config::default());
    let text = buffer_text(&render_buffer(&mut app, 80, 24)).join("\n");

    assert!(text.contains("# Intro"));
    assert!(text.contains("#/0/0"));
    assert!(text.contains("QUIRE"));
    assert!(text.contains("1/3"));
}

#[test]
fn test_status_shows_stack_position() {
    let mut app = make_app(&Config::default());
    app.navigator.navigate_right();
    app.navigator.navigate_down();
    let text = buffer_text(&render_buffer(&mut app, 80, 24)).join("\n");

    assert!(text.contains("# Detail"));
    assert!(text.contains("2/3"));
    assert!(text.contains("↕ 2/2"));
}

#[test]
fn test_controls_are_recorded_for_clicks() {
    let mut app = make_app(&Config::default());
    render_buffer(&mut app, 80, 24);

    let controls: Vec<Control> = app.control_areas.iter().map(|(c, _)| *c).collect();
    assert_eq!(controls, Control::ALL.to_vec());
    assert!(app.control_areas.iter().all(|(_, area)| area.y == 23));
}

#[test]
fn test_zen_mode_hides_chrome() {
    let mut config = Config::default();
    config.ui.zen = true;
    let mut app = make_app(&config);
    let text = buffer_text(&render_buffer(&mut app, 80, 24)).join("\n");

    assert!(text.contains("# Intro"));
    assert!(!text.contains("QUIRE"));
    assert!(app.control_areas.is_empty());
}

#[test]
fn test_controls_without_status_bar() {
    let mut config = Config::default();
    config.ui.status_bar = false;
    let mut app = make_app(&config);
    render_buffer(&mut app, 80, 24);
    assert_eq!(app.control_areas.len(), 4);
}

#[test]
fn test_empty_deck_renders_placeholder() {
    let mut app = App::new(parse_text_deck(""), "empty.md".to_string(), &Config::default());
    app.initialize(None);
    let text = buffer_text(&render_buffer(&mut app, 60, 20)).join("\n");
    assert!(text.contains("Empty deck"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = make_app(&Config::default());
    app.show_help = true;
    render_buffer(&mut app, 3, 2);
    app.show_help = false;
    app.show_overview = true;
    render_buffer(&mut app, 3, 2);
}

#[test]
fn test_overview_shape() {
    let mut app = make_app(&Config::default());
    app.navigator.navigate_right();

    let lines = overview_lines(&app);
    // Header row plus two rows for the stack
    assert_eq!(lines.len(), 3);
    let header: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(header.trim_end(), "■  ▣  ■");
}
