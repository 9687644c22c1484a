//! Slide scaling and centering within the terminal

use crate::config::LayoutConfig;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Where the active slide is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    /// Scaled slide frame, centered in the available area
    pub frame: Rect,
    pub scale: f32,
    /// Rows between the top of the frame and the first content line
    pub content_top: u16,
}

/// Factor that fits the virtual slide into `area` without distortion
pub fn fit_scale(area: Rect, config: &LayoutConfig) -> f32 {
    if config.slide_width == 0 || config.slide_height == 0 {
        return 1.0;
    }
    let horizontal = area.width as f32 / config.slide_width as f32;
    let vertical = area.height as f32 / config.slide_height as f32;
    horizontal.min(vertical)
}

/// The scaled slide frame centered in `area`
pub fn slide_frame(area: Rect, config: &LayoutConfig) -> (Rect, f32) {
    let scale = fit_scale(area, config);
    let width = ((config.slide_width as f32 * scale).round() as u16).min(area.width);
    let height = ((config.slide_height as f32 * scale).round() as u16).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    (Rect::new(x, y, width, height), scale)
}

/// Offset that vertically centers content, less the padding, never negative
pub fn content_top(frame_height: u16, content_height: u16, padding: u16) -> u16 {
    (frame_height.saturating_sub(content_height) / 2).saturating_sub(padding)
}

/// Rows `content` takes when wrapped to `width` columns
pub fn wrapped_height(content: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let rows: usize = content
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}

/// Lay out a slide with the given content inside `area`
pub fn compute(area: Rect, content: &str, config: &LayoutConfig) -> SlideLayout {
    let (frame, scale) = slide_frame(area, config);
    // One cell of border on each side
    let inner_width = frame.width.saturating_sub(2);
    let inner_height = frame.height.saturating_sub(2);
    let content_height = wrapped_height(content, inner_width);

    SlideLayout {
        frame,
        scale,
        content_top: content_top(inner_height, content_height, config.padding),
    }
}
