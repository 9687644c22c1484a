//! Quire core - grid navigation for two-axis slide decks
//!
//! A deck is a row of horizontal slides, any of which may hold a vertical
//! stack. [`Navigator`] owns the current [`Position`], validates moves with
//! [`available_routes`], and reclassifies slides as past/present/future on
//! every transition.

pub mod classify;
pub mod deck;
pub mod grid;
pub mod input;
pub mod location;
pub mod navigator;
pub mod routes;

pub use classify::{classify, SlideClass, SlideState, Target};
pub use deck::{load_deck, parse_json_deck, parse_text_deck, DeckError};
pub use grid::{Group, GridError, Position, Slide, SlideGrid, SlideNode};
pub use input::{Command, Control};
pub use location::{format_fragment, parse_fragment};
pub use navigator::{NavigationState, Navigator, Presenter, VerticalPolicy};
pub use routes::{available_routes, Routes};
