//! Configuration file support for quire
//!
//! Config file location: `~/.config/quire/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [ui]
//! zen = false
//! controls = true
//! status_bar = true
//!
//! [ui.theme]
//! accent = "brand"
//! text = "white"
//! muted = "dark_gray"
//! border = "#4c566a"
//!
//! [ui.theme.defs]
//! brand = "#88C0D0"
//!
//! [layout]
//! slide_width = 96
//! slide_height = 35
//! padding = 2
//!
//! [navigation]
//! vertical = "keep"    # or "reset", "restore"
//!
//! [log]
//! file = "/tmp/quire.log"
//! filter = "quire=debug,quire_core=debug"
//! ```

use crate::color;
use quire_core::VerticalPolicy;
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Theme colors, each a def name, hex value or ANSI color name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Named color definitions (e.g., brand = "#88C0D0")
    pub defs: HashMap<String, String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub border: Option<String>,
}

/// Resolved theme, all ratatui Colors ready to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl ResolvedTheme {
    /// Color for a control whose route is closed
    pub fn disabled(&self) -> Color {
        color::dim_color(self.muted)
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        ThemeConfig::default().resolve()
    }
}

impl ThemeConfig {
    pub fn resolve(&self) -> ResolvedTheme {
        let resolve = |value: &Option<String>, fallback: Color| -> Color {
            value
                .as_deref()
                .and_then(|v| color::resolve_color(v, &self.defs))
                .unwrap_or(fallback)
        };

        ResolvedTheme {
            text: resolve(&self.text, Color::Reset),
            muted: resolve(&self.muted, Color::DarkGray),
            accent: resolve(&self.accent, Color::Cyan),
            border: resolve(&self.border, Color::DarkGray),
        }
    }
}

/// UI configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Start in zen mode (slide only, no chrome)
    pub zen: bool,
    /// Show the four navigation arrows
    pub controls: bool,
    /// Show the status bar
    pub status_bar: bool,
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            zen: false,
            controls: true,
            status_bar: true,
            theme: ThemeConfig::default(),
        }
    }
}

/// Virtual slide size in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub slide_width: u16,
    pub slide_height: u16,
    /// Subtracted from the vertical centering offset
    pub padding: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slide_width: 96,
            slide_height: 35,
            padding: 2,
        }
    }
}

/// Navigation configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// What a horizontal move does to the vertical index
    pub vertical: VerticalPolicy,
}

/// Logging configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; logging stays off without one
    pub file: Option<PathBuf>,
    /// `EnvFilter` directives, overridden by `QUIRE_LOG`
    pub filter: Option<String>,
}

/// Root configuration
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub layout: LayoutConfig,
    pub navigation: NavigationConfig,
    pub log: LogConfig,
}

impl Config {
    /// Get all possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("quire").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("quire").join("config.toml"));
        }

        // Platform-specific config dir (~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("quire").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Get the first existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load config from the XDG config path.
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    fn parse(content: &str) -> Self {
        toml::from_str(content)
            .map_err(|e| {
                eprintln!("Warning: Failed to parse config: {}", e);
                e
            })
            .unwrap_or_default()
    }
}
