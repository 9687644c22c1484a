//! The navigation state machine

use crate::classify::{classify, SlideClass, Target};
use crate::grid::{Group, Position, Slide, SlideGrid};
use crate::input::Command;
use crate::location::{format_fragment, parse_fragment};
use crate::routes::{available_routes, Routes};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Collaborator notified after every transition
pub trait Presenter {
    /// Recompute slide placement for the new position
    fn refresh_layout(&mut self) {}

    /// Update the four directional affordances
    fn refresh_controls(&mut self, _routes: Routes) {}
}

impl Presenter for () {}

/// What a horizontal move does to the vertical index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPolicy {
    /// Carry the current vertical index over, clamped to the new stack
    #[default]
    Keep,
    /// Always land on the top of the stack
    Reset,
    /// Return to the vertical slide last shown in that stack
    Restore,
}

/// Position plus per-slide classification, owned by the [`Navigator`]
#[derive(Debug, Clone)]
pub struct NavigationState {
    position: Position,
    horizontal: Vec<SlideClass>,
    /// One entry per horizontal group; empty for single slides
    vertical: Vec<Vec<SlideClass>>,
    /// Last vertical index shown per horizontal group
    last_vertical: Vec<usize>,
}

impl NavigationState {
    fn new(grid: &SlideGrid) -> Self {
        let horizontal = grid
            .groups()
            .iter()
            .map(|group| {
                if group.is_stack() {
                    SlideClass::stack()
                } else {
                    SlideClass::default()
                }
            })
            .collect();

        let vertical = grid
            .groups()
            .iter()
            .map(|group| match group {
                Group::Single(_) => Vec::new(),
                Group::Stack(slides) => vec![SlideClass::default(); slides.len()],
            })
            .collect();

        Self {
            position: Position::default(),
            horizontal,
            vertical,
            last_vertical: vec![0; grid.horizontal_count()],
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Classification of horizontal slide `h`
    pub fn horizontal_class(&self, h: usize) -> Option<SlideClass> {
        self.horizontal.get(h).copied()
    }

    /// Classification of vertical slide `v` in stack `h`
    pub fn vertical_class(&self, h: usize, v: usize) -> Option<SlideClass> {
        self.vertical.get(h)?.get(v).copied()
    }

    pub fn horizontal_classes(&self) -> &[SlideClass] {
        &self.horizontal
    }

    pub fn vertical_classes(&self, h: usize) -> &[SlideClass] {
        self.vertical.get(h).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Drives a [`NavigationState`] over a fixed [`SlideGrid`]
pub struct Navigator<P = ()> {
    grid: SlideGrid,
    state: NavigationState,
    policy: VerticalPolicy,
    presenter: P,
}

impl<P: Presenter> Navigator<P> {
    pub fn new(grid: SlideGrid, presenter: P) -> Self {
        let state = NavigationState::new(&grid);
        Self {
            grid,
            state,
            policy: VerticalPolicy::default(),
            presenter,
        }
    }

    pub fn with_policy(mut self, policy: VerticalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> &SlideGrid {
        &self.grid
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn horizontal_count(&self) -> usize {
        self.grid.horizontal_count()
    }

    /// Vertical slides in the active group (0 when it is a single slide)
    pub fn vertical_count(&self) -> usize {
        self.grid.vertical_count(self.state.position.h)
    }

    pub fn routes(&self) -> Routes {
        available_routes(self.state.position, &self.grid)
    }

    /// The slide at the current position, if the deck has any
    pub fn current_slide(&self) -> Option<&Slide> {
        self.grid.slide_at(self.state.position)
    }

    /// Current position as a location fragment
    pub fn fragment(&self) -> String {
        format_fragment(self.state.position)
    }

    /// Settle on the initial location, (0, 0) when none is given.
    ///
    /// Always runs one transition so every horizontal slide is classified.
    pub fn initialize(&mut self, fragment: Option<&str>) {
        let start = fragment.map(parse_fragment).unwrap_or_default();
        debug!(h = start.h, v = start.v, "initializing navigator");
        self.go_to(Some(Target::Index(start.h)), Some(Target::Index(start.v)));
    }

    /// Move to the given indices. An omitted axis keeps its current index;
    /// out-of-range targets clamp to the nearest slide.
    ///
    /// Layout and controls are refreshed even when the position is unchanged.
    pub fn go_to(&mut self, h: Option<Target>, v: Option<Target>) {
        let current = self.state.position;

        let h_target = h.unwrap_or(Target::Index(current.h));
        let h = classify(&mut self.state.horizontal, h_target);

        let v_target = v.unwrap_or(Target::Index(current.v));
        let v = match self.state.vertical.get_mut(h) {
            Some(axis) => classify(axis, v_target),
            None => 0,
        };

        self.state.position = Position { h, v };
        if let Some(last) = self.state.last_vertical.get_mut(h) {
            *last = v;
        }
        debug!(h, v, from_h = current.h, from_v = current.v, "navigated");

        self.presenter.refresh_layout();
        let routes = self.routes();
        self.presenter.refresh_controls(routes);
    }

    /// Vertical target for a horizontal move onto group `h`
    fn horizontal_move_vertical(&self, h: usize) -> Target {
        let current = self.state.position.v;
        match self.policy {
            VerticalPolicy::Keep => Target::Index(current),
            VerticalPolicy::Reset => Target::Index(0),
            VerticalPolicy::Restore => {
                Target::Index(self.state.last_vertical.get(h).copied().unwrap_or(0))
            }
        }
    }

    pub fn navigate_left(&mut self) -> bool {
        if !self.routes().left {
            trace!("left route closed");
            return false;
        }
        let h = self.state.position.h - 1;
        let v = self.horizontal_move_vertical(h);
        self.go_to(Some(Target::Index(h)), Some(v));
        true
    }

    pub fn navigate_right(&mut self) -> bool {
        if !self.routes().right {
            trace!("right route closed");
            return false;
        }
        let h = self.state.position.h + 1;
        let v = self.horizontal_move_vertical(h);
        self.go_to(Some(Target::Index(h)), Some(v));
        true
    }

    pub fn navigate_up(&mut self) -> bool {
        if !self.routes().up {
            trace!("up route closed");
            return false;
        }
        self.go_to(None, Some(Target::Index(self.state.position.v - 1)));
        true
    }

    pub fn navigate_down(&mut self) -> bool {
        if !self.routes().down {
            trace!("down route closed");
            return false;
        }
        self.go_to(None, Some(Target::Index(self.state.position.v + 1)));
        true
    }

    /// First horizontal slide, top of its stack
    pub fn navigate_home(&mut self) {
        self.go_to(Some(Target::Index(0)), Some(Target::Index(0)));
    }

    /// Last horizontal slide
    pub fn navigate_end(&mut self) {
        let last = self.grid.horizontal_count().saturating_sub(1);
        let v = self.horizontal_move_vertical(last);
        self.go_to(Some(Target::Last), Some(v));
    }

    /// Run a decoded input command. Returns false for refused moves.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Left => self.navigate_left(),
            Command::Right => self.navigate_right(),
            Command::Up => self.navigate_up(),
            Command::Down => self.navigate_down(),
            Command::Home => {
                self.navigate_home();
                true
            }
            Command::End => {
                self.navigate_end();
                true
            }
        }
    }

    /// React to an external location change. Transitions only when the
    /// fragment names a different position; returns whether it did.
    pub fn location_changed(&mut self, fragment: &str) -> bool {
        let target = parse_fragment(fragment);
        if target == self.state.position {
            trace!(fragment, "location unchanged");
            return false;
        }
        self.go_to(Some(Target::Index(target.h)), Some(Target::Index(target.v)));
        true
    }
}
