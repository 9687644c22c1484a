use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use quire_core::{parse_text_deck, Position, VerticalPolicy};

/// Three topics, the middle one a two-slide stack
const DECK: &str = "A\n---\nB1\n--\nB2\n---\nC\n";

fn make_app() -> App {
    let mut app = App::new(parse_text_deck(DECK), "talk.md".to_string(), &Config::default());
    app.initialize(None);
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn test_arrow_and_vim_keys() {
    let mut app = make_app();

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.navigator.position(), Position::new(1, 0));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.navigator.position(), Position::new(1, 1));
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.navigator.position(), Position::new(1, 0));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.navigator.position(), Position::new(2, 0));
    press(&mut app, KeyCode::Char('h'));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.navigator.position(), Position::new(0, 0));
}

#[test]
fn test_home_and_end_keys() {
    let mut app = make_app();
    press(&mut app, KeyCode::End);
    assert_eq!(app.navigator.position(), Position::new(2, 0));
    press(&mut app, KeyCode::Home);
    assert_eq!(app.navigator.position(), Position::new(0, 0));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.location(), "talk.md#/2/0");
}

#[test]
fn test_counted_moves_stop_at_edge() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.navigator.position(), Position::new(2, 0));
    assert_eq!(app.pending_count, None);
}

#[test]
fn test_refused_move_keeps_controls() {
    let mut app = make_app();
    let requests = app.navigator.presenter().layout_requests;
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.navigator.presenter().layout_requests, requests);
    assert!(!app.routes().left);
    assert!(app.routes().right);
}

#[test]
fn test_location_prompt() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.prompt.as_deref(), Some("#/0/0"));

    for _ in 0..5 {
        press(&mut app, KeyCode::Backspace);
    }
    for c in "#/1/1".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.prompt, None);
    assert_eq!(app.navigator.position(), Position::new(1, 1));

    // Same location again is not a transition
    let requests = app.navigator.presenter().layout_requests;
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.navigator.presenter().layout_requests, requests);
}

#[test]
fn test_prompt_escape_cancels() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Char('9'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.prompt, None);
    assert!(!app.should_quit);
    assert_eq!(app.navigator.position(), Position::new(0, 0));
}

#[test]
fn test_click_on_control() {
    let mut app = make_app();
    app.control_areas = vec![
        (Control::Left, Rect::new(10, 5, 1, 1)),
        (Control::Right, Rect::new(16, 5, 1, 1)),
    ];

    click(&mut app, 16, 5);
    assert_eq!(app.navigator.position(), Position::new(1, 0));
    click(&mut app, 12, 5);
    assert_eq!(app.navigator.position(), Position::new(1, 0));
    click(&mut app, 10, 5);
    assert_eq!(app.navigator.position(), Position::new(0, 0));
}

#[test]
fn test_overlays_swallow_navigation() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.navigator.position(), Position::new(0, 0));
    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_layout_is_cached_until_requested() {
    let mut app = make_app();
    let area = Rect::new(0, 0, 80, 24);
    let first = app.slide_layout(area);
    assert_eq!(app.slide_layout(area), first);

    // Navigation asks for a fresh layout; the request is consumed once
    app.navigator.navigate_right();
    app.slide_layout(area);
    assert!(!app.navigator.presenter_mut().take_layout_request());

    let resized = app.slide_layout(Rect::new(0, 0, 40, 12));
    assert_ne!(resized.frame, first.frame);
}

#[test]
fn test_resize_requests_layout() {
    let mut app = make_app();
    app.slide_layout(Rect::new(0, 0, 80, 24));
    app.handle_resize();
    assert!(app.navigator.presenter_mut().take_layout_request());
}

#[test]
fn test_restore_policy_from_config() {
    let mut config = Config::default();
    config.navigation.vertical = VerticalPolicy::Restore;
    let mut app = App::new(parse_text_deck(DECK), "talk.md".to_string(), &config);
    app.initialize(Some("#/1/1"));

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.navigator.position(), Position::new(1, 1));
}
