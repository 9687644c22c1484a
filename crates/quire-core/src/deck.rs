//! Loading decks from text or JSON files

use crate::grid::{GridError, SlideGrid, SlideNode};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON deck: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid deck shape: {0}")]
    Grid(#[from] GridError),
}

/// Separator line between horizontal slides
pub const HORIZONTAL_SEPARATOR: &str = "---";
/// Separator line between vertical slides of one stack
pub const VERTICAL_SEPARATOR: &str = "--";

/// Load a deck, picking the format from the file extension
pub fn load_deck(path: &Path) -> Result<SlideGrid, DeckError> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_json_deck(&content)
    } else {
        Ok(parse_text_deck(&content))
    }
}

/// Parse a JSON array of slide nodes
pub fn parse_json_deck(content: &str) -> Result<SlideGrid, DeckError> {
    let nodes: Vec<SlideNode> = serde_json::from_str(content)?;
    Ok(SlideGrid::from_nodes(nodes)?)
}

/// Parse a plain text deck.
///
/// A line holding only `---` starts a new horizontal slide; a line holding
/// only `--` starts a new vertical slide in the same stack. Blank slides are
/// dropped.
pub fn parse_text_deck(content: &str) -> SlideGrid {
    let mut nodes = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        match line.trim_end() {
            HORIZONTAL_SEPARATOR => {
                push_slide(&mut stack, &mut current);
                push_group(&mut nodes, &mut stack);
            }
            VERTICAL_SEPARATOR => push_slide(&mut stack, &mut current),
            _ => {
                current.push_str(line);
                current.push('\n');
            }
        }
    }
    push_slide(&mut stack, &mut current);
    push_group(&mut nodes, &mut stack);

    // Leaf and stack nodes only, so the shape is always valid
    SlideGrid::from_nodes(nodes).unwrap_or_default()
}

fn push_slide(stack: &mut Vec<String>, current: &mut String) {
    let body = std::mem::take(current);
    let body = body.trim_matches('\n');
    if !body.trim().is_empty() {
        stack.push(body.to_string());
    }
}

fn push_group(nodes: &mut Vec<SlideNode>, stack: &mut Vec<String>) {
    let mut slides = std::mem::take(stack);
    match slides.len() {
        0 => {}
        1 => nodes.extend(slides.pop().map(SlideNode::leaf)),
        _ => nodes.push(SlideNode::stack(
            slides.into_iter().map(SlideNode::leaf).collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Group, Position};

    const DECK: &str = "# Intro\nhello\n---\n# Topic\n--\n# Detail\nmore\n---\n# Outro\n";

    #[test]
    fn test_text_deck_shape() {
        let grid = parse_text_deck(DECK);
        assert_eq!(grid.horizontal_count(), 3);
        assert!(matches!(grid.group(0), Some(Group::Single(_))));
        assert_eq!(grid.vertical_count(1), 2);
        assert_eq!(
            grid.slide_at(Position::new(1, 1)).and_then(|s| s.title()),
            Some("Detail")
        );
        assert_eq!(grid.slide_at(Position::new(0, 0)).unwrap().content, "# Intro\nhello");
    }

    #[test]
    fn test_text_deck_skips_blank_slides() {
        let grid = parse_text_deck("---\n\n---\nonly\n--\n   \n---\n");
        assert_eq!(grid.horizontal_count(), 1);
        assert!(!grid.group(0).unwrap().is_stack());
    }

    #[test]
    fn test_text_deck_empty() {
        assert!(parse_text_deck("").is_empty());
    }

    #[test]
    fn test_text_deck_keeps_longer_rules() {
        let grid = parse_text_deck("a\n----\nb");
        assert_eq!(grid.horizontal_count(), 1);
    }

    #[test]
    fn test_json_deck() {
        let json = r#"[
            {"content": "a"},
            {"children": [{"content": "b1"}, {"content": "b2"}]},
            {"content": "c", "children": []}
        ]"#;
        let grid = parse_json_deck(json).unwrap();
        assert_eq!(grid.horizontal_count(), 3);
        assert_eq!(grid.vertical_count(1), 2);
        assert_eq!(grid.vertical_count(2), 0);
    }

    #[test]
    fn test_json_deck_errors() {
        assert!(matches!(parse_json_deck("{"), Err(DeckError::Json(_))));
        let deep = r#"[{"children": [{"children": [{"content": "x"}]}]}]"#;
        assert!(matches!(
            parse_json_deck(deep),
            Err(DeckError::Grid(GridError::NestedTooDeep { h: 0, v: 0 }))
        ));
    }
}
