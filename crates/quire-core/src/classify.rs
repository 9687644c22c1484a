//! Past/present/future classification along one axis

use serde::{Deserialize, Serialize};

/// Where a slide sits relative to the active index of its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideState {
    Past,
    Present,
    /// Also the state of slides that have never been classified
    #[default]
    Future,
}

/// Classification of one slide plus its stack tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlideClass {
    pub state: SlideState,
    /// Set when the slide holds vertical children. Informational only.
    pub stack: bool,
}

impl SlideClass {
    pub fn stack() -> Self {
        Self {
            state: SlideState::Future,
            stack: true,
        }
    }

    pub fn is_present(&self) -> bool {
        self.state == SlideState::Present
    }
}

/// Requested index on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Index(usize),
    /// Whatever the last slide of the axis is
    Last,
}

/// Mark the slide at `target` present, earlier ones past, later ones future.
///
/// Out-of-range targets clamp to the last slide. An empty axis has nothing to
/// classify and yields 0. Returns the index that ended up present.
pub fn classify(axis: &mut [SlideClass], target: Target) -> usize {
    let Some(last) = axis.len().checked_sub(1) else {
        return 0;
    };

    let index = match target {
        Target::Index(i) => i.min(last),
        Target::Last => last,
    };

    for (i, class) in axis.iter_mut().enumerate() {
        class.state = if i < index {
            SlideState::Past
        } else if i > index {
            SlideState::Future
        } else {
            SlideState::Present
        };
    }

    index
}
