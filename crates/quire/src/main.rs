//! Quire CLI - two-axis slide presenter TUI

mod app;
mod color;
mod config;
mod layout;
mod logging;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about = "A two-axis slide deck presenter")]
struct Args {
    /// Deck file (text or .json), optionally with a location: talk.md#/2/1
    deck: String,

    /// Starting location, e.g. "#/2/1" (overrides one given with the deck)
    #[arg(long)]
    at: Option<String>,

    /// Start in zen mode
    #[arg(long)]
    zen: bool,

    /// Write logs to this file (filter with QUIRE_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Split `talk.md#/2/1` into the path and its fragment.
///
/// A path that exists as written is never split.
fn split_location(arg: &str) -> (PathBuf, Option<String>) {
    if Path::new(arg).exists() {
        return (PathBuf::from(arg), None);
    }
    match arg.rfind("#/") {
        Some(idx) => (PathBuf::from(&arg[..idx]), Some(arg[idx..].to_string())),
        None => (PathBuf::from(arg), None),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::Config::load();

    let log_file = args.log_file.as_deref().or(config.log.file.as_deref());
    logging::init(log_file, config.log.filter.as_deref())?;

    let (deck_path, deck_fragment) = split_location(&args.deck);
    let fragment = args.at.clone().or(deck_fragment);

    let grid = quire_core::load_deck(&deck_path)
        .with_context(|| format!("Failed to load deck: {}", deck_path.display()))?;
    tracing::info!(
        path = %deck_path.display(),
        topics = grid.horizontal_count(),
        slides = grid.slide_count(),
        "deck loaded"
    );

    let mut app = App::new(grid, deck_path.display().to_string(), &config);
    if args.zen {
        app.zen_mode = true;
    }
    app.initialize(fragment.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    // Resume later with `quire <location>`
    println!("{}", app.location());
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(50);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_, _) => app.handle_resize(),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
