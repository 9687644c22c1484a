//! Which single-step moves are legal from a position

use crate::grid::{Position, SlideGrid};
use serde::{Deserialize, Serialize};

/// Legal directions from the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Routes {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Routes {
    /// True when no direction is open (single-slide deck)
    pub fn is_closed(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Compute the available routes. Missing groups count as zero slides.
pub fn available_routes(position: Position, grid: &SlideGrid) -> Routes {
    let horizontal = grid.horizontal_count();
    let vertical = grid.vertical_count(position.h);

    Routes {
        left: position.h > 0,
        right: position.h + 1 < horizontal,
        up: position.v > 0,
        down: position.v + 1 < vertical,
    }
}
