//! Color parsing for theme values

use ratatui::style::Color;
use std::collections::HashMap;

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse hex color string (e.g., "#2ecc71" or "2ecc71")
pub fn parse_hex(s: &str) -> Result<Rgb, String> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return Err(format!(
            "invalid hex color: expected 6 characters, got {}",
            s.len()
        ));
    }

    let channel = |range: std::ops::Range<usize>, name: &str| {
        s.get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .ok_or_else(|| format!("invalid hex color: bad {} component in '{}'", name, s))
    };

    Ok(Rgb {
        r: channel(0..2, "red")?,
        g: channel(2..4, "green")?,
        b: channel(4..6, "blue")?,
    })
}

/// Parse ANSI color name to ratatui Color
pub fn parse_ansi_name(name: &str) -> Option<Color> {
    match name.to_lowercase().replace('-', "_").as_str() {
        "default" | "reset" | "transparent" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

/// Resolve a color string: def reference, hex, or ANSI name
pub fn resolve_color(value: &str, defs: &HashMap<String, String>) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = defs.get(value) {
        return parse_hex(hex)
            .ok()
            .map(|rgb| Color::Rgb(rgb.r, rgb.g, rgb.b));
    }

    if value.starts_with('#') {
        return parse_hex(value)
            .ok()
            .map(|rgb| Color::Rgb(rgb.r, rgb.g, rgb.b));
    }

    parse_ansi_name(value)
}

/// Darken a color for disabled affordances; named colors fall back to dark gray
pub fn dim_color(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (u16::from(c) * 3 / 5) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        Color::Reset | Color::Black | Color::DarkGray | Color::Indexed(_) => color,
        _ => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#2ecc71"), Ok(Rgb { r: 0x2e, g: 0xcc, b: 0x71 }));
        assert_eq!(parse_hex("000000"), Ok(Rgb { r: 0, g: 0, b: 0 }));
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("#gg0000").is_err());
    }

    #[test]
    fn test_resolve_color_sources() {
        let mut defs = HashMap::new();
        defs.insert("brand".to_string(), "#ff0000".to_string());

        assert_eq!(resolve_color("brand", &defs), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(resolve_color("#00ff00", &defs), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(resolve_color("light-cyan", &defs), Some(Color::LightCyan));
        assert_eq!(resolve_color("nope", &defs), None);
    }

    #[test]
    fn test_dim_color() {
        assert_eq!(dim_color(Color::Cyan), Color::DarkGray);
        assert_eq!(dim_color(Color::Reset), Color::Reset);
        match dim_color(Color::Rgb(200, 40, 40)) {
            Color::Rgb(r, g, b) => assert_eq!((r, g, b), (120, 24, 24)),
            other => panic!("expected rgb, got {:?}", other),
        }
    }
}
