//! Slide grid shape and positions within it

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("slide {h}/{v} has nested slides; only two axes are supported")]
    NestedTooDeep { h: usize, v: usize },
}

/// A position in the grid: horizontal index and vertical index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub h: usize,
    pub v: usize,
}

impl Position {
    pub fn new(h: usize, v: usize) -> Self {
        Self { h, v }
    }
}

/// A single slide's content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub content: String,
}

impl Slide {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// First non-empty line, with any leading markdown heading marks removed
    pub fn title(&self) -> Option<&str> {
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(|line| line.trim_start_matches('#').trim_start())
    }
}

/// A tree node as handed over by whatever produced the deck
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideNode {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SlideNode>,
}

impl SlideNode {
    pub fn leaf(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn stack(children: Vec<SlideNode>) -> Self {
        Self {
            content: String::new(),
            children,
        }
    }
}

/// One horizontal entry of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    Single(Slide),
    /// Always holds at least one slide
    Stack(Vec<Slide>),
}

impl Group {
    pub fn is_stack(&self) -> bool {
        matches!(self, Group::Stack(_))
    }

    /// Number of vertical slides (0 for a single slide)
    pub fn vertical_count(&self) -> usize {
        match self {
            Group::Single(_) => 0,
            Group::Stack(slides) => slides.len(),
        }
    }

    /// The slide shown when this group is active at vertical index `v`
    pub fn slide(&self, v: usize) -> Option<&Slide> {
        match self {
            Group::Single(slide) => Some(slide),
            Group::Stack(slides) => slides.get(v),
        }
    }
}

/// The read-only shape of a deck
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideGrid {
    groups: Vec<Group>,
}

impl SlideGrid {
    pub fn new(groups: Vec<Group>) -> Self {
        // An empty stack would break the "at least one child" invariant
        let groups = groups
            .into_iter()
            .filter(|group| !matches!(group, Group::Stack(slides) if slides.is_empty()))
            .collect();
        Self { groups }
    }

    /// Build the grid from a slide tree. Nodes with children become stacks.
    pub fn from_nodes(nodes: Vec<SlideNode>) -> Result<Self, GridError> {
        let mut groups = Vec::with_capacity(nodes.len());
        for (h, node) in nodes.into_iter().enumerate() {
            if node.children.is_empty() {
                groups.push(Group::Single(Slide::new(node.content)));
                continue;
            }

            let mut slides = Vec::with_capacity(node.children.len());
            for (v, child) in node.children.into_iter().enumerate() {
                if !child.children.is_empty() {
                    return Err(GridError::NestedTooDeep { h, v });
                }
                slides.push(Slide::new(child.content));
            }
            groups.push(Group::Stack(slides));
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, h: usize) -> Option<&Group> {
        self.groups.get(h)
    }

    pub fn horizontal_count(&self) -> usize {
        self.groups.len()
    }

    /// Vertical slide count of group `h`, 0 for singles and missing groups
    pub fn vertical_count(&self, h: usize) -> usize {
        self.groups.get(h).map(Group::vertical_count).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The slide at a position, if any
    pub fn slide_at(&self, position: Position) -> Option<&Slide> {
        self.group(position.h)?.slide(position.v)
    }

    /// Total number of slides, counting each stack child
    pub fn slide_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.vertical_count().max(1))
            .sum()
    }
}
