//! Application state and logic

use crate::config::{Config, LayoutConfig, ResolvedTheme};
use crate::layout::{self, SlideLayout};
use quire_core::{Control, Navigator, Presenter, Routes, SlideGrid};
use ratatui::layout::Rect;

mod chrome;
mod keys;

pub use chrome::Chrome;

/// The main application state
pub struct App {
    /// Navigation state machine for the loaded deck
    pub navigator: Navigator<Chrome>,
    /// Deck path as given on the command line (without fragment)
    pub deck_name: String,
    pub theme: ResolvedTheme,
    pub layout_config: LayoutConfig,
    /// Cached slide layout, recomputed on request or when the area changes
    layout: Option<SlideLayout>,
    last_area: Option<Rect>,
    /// Zen mode - slide only, no status bar or controls
    pub zen_mode: bool,
    pub controls_visible: bool,
    pub status_bar_visible: bool,
    pub show_help: bool,
    /// Grid overview popup
    pub show_overview: bool,
    /// Location prompt text while `:` is active
    pub prompt: Option<String>,
    /// Pending count for vim-style commands (e.g., 3l)
    pub pending_count: Option<usize>,
    /// Screen areas of the rendered control arrows, for mouse hits
    pub control_areas: Vec<(Control, Rect)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(grid: SlideGrid, deck_name: String, config: &Config) -> Self {
        let navigator =
            Navigator::new(grid, Chrome::default()).with_policy(config.navigation.vertical);
        Self {
            navigator,
            deck_name,
            theme: config.ui.theme.resolve(),
            layout_config: config.layout,
            layout: None,
            last_area: None,
            zen_mode: config.ui.zen,
            controls_visible: config.ui.controls,
            status_bar_visible: config.ui.status_bar,
            show_help: false,
            show_overview: false,
            prompt: None,
            pending_count: None,
            control_areas: Vec::new(),
            should_quit: false,
        }
    }

    /// Settle on the starting location
    pub fn initialize(&mut self, fragment: Option<&str>) {
        self.navigator.initialize(fragment);
    }

    pub fn routes(&self) -> Routes {
        self.navigator.presenter().routes
    }

    /// Current location as `deck#/h/v`
    pub fn location(&self) -> String {
        format!("{}{}", self.deck_name, self.navigator.fragment())
    }

    /// Viewport size changed
    pub fn handle_resize(&mut self) {
        self.navigator.presenter_mut().refresh_layout();
    }

    /// Slide layout for `area`, recomputed only when requested or resized
    pub fn slide_layout(&mut self, area: Rect) -> SlideLayout {
        let requested = self.navigator.presenter_mut().take_layout_request();
        match self.layout {
            Some(cached) if !requested && self.last_area == Some(area) => cached,
            _ => {
                let content = self
                    .navigator
                    .current_slide()
                    .map(|slide| slide.content.as_str())
                    .unwrap_or("");
                let computed = layout::compute(area, content, &self.layout_config);
                tracing::trace!(?computed, "layout refreshed");
                self.layout = Some(computed);
                self.last_area = Some(area);
                computed
            }
        }
    }

    pub fn push_count_digit(&mut self, digit: u8) {
        let current = self.pending_count.unwrap_or(0);
        self.pending_count = Some(current.saturating_mul(10).saturating_add(digit as usize));
    }

    /// Take the pending count, defaulting to 1
    pub fn take_count(&mut self) -> usize {
        self.pending_count.take().unwrap_or(1).max(1)
    }

    pub fn reset_count(&mut self) {
        self.pending_count = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_zen(&mut self) {
        self.zen_mode = !self.zen_mode;
        self.handle_resize();
    }

    pub fn toggle_overview(&mut self) {
        self.show_overview = !self.show_overview;
    }

    /// Start the `:` location prompt, prefilled with the current fragment
    pub fn open_prompt(&mut self) {
        self.prompt = Some(self.navigator.fragment());
    }

    /// Treat the prompt text as a location change
    pub fn submit_prompt(&mut self) {
        if let Some(fragment) = self.prompt.take() {
            if !self.navigator.location_changed(&fragment) {
                tracing::debug!(%fragment, "location prompt named the current slide");
            }
        }
    }
}

#[cfg(test)]
mod tests;
