//! Location fragments (`#/<h>/<v>`) for deep links

use crate::grid::Position;

/// Parse a fragment like `#/2/1` into a position.
///
/// The leading `#` and `/` are optional. Each segment takes its leading
/// digits; a missing, non-numeric or negative segment reads as 0, and values
/// too large for `usize` saturate.
pub fn parse_fragment(fragment: &str) -> Position {
    let path = fragment.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut segments = path.split('/');
    let h = segments.next().map(parse_segment).unwrap_or(0);
    let v = segments.next().map(parse_segment).unwrap_or(0);

    Position { h, v }
}

/// Render a position as a fragment that [`parse_fragment`] reads back
pub fn format_fragment(position: Position) -> String {
    format!("#/{}/{}", position.h, position.v)
}

fn parse_segment(segment: &str) -> usize {
    let segment = segment.trim_start();
    let (negative, digits) = match segment.as_bytes().first() {
        Some(b'-') => (true, &segment[1..]),
        Some(b'+') => (false, &segment[1..]),
        _ => (false, segment),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 0;
    }

    digits
        .bytes()
        .fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_fragment() {
        assert_eq!(parse_fragment("#/2/1"), Position::new(2, 1));
        assert_eq!(parse_fragment("/2/1"), Position::new(2, 1));
        assert_eq!(parse_fragment("2/1"), Position::new(2, 1));
    }

    #[test]
    fn test_parse_missing_segments() {
        assert_eq!(parse_fragment(""), Position::new(0, 0));
        assert_eq!(parse_fragment("#"), Position::new(0, 0));
        assert_eq!(parse_fragment("#/"), Position::new(0, 0));
        assert_eq!(parse_fragment("#/4"), Position::new(4, 0));
        assert_eq!(parse_fragment("#//3"), Position::new(0, 3));
    }

    #[test]
    fn test_parse_malformed_segments() {
        assert_eq!(parse_fragment("#/abc/def"), Position::new(0, 0));
        assert_eq!(parse_fragment("#/3px/2em"), Position::new(3, 2));
        assert_eq!(parse_fragment("#/-2/-1"), Position::new(0, 0));
        assert_eq!(parse_fragment("#/+5/ 6"), Position::new(5, 6));
    }

    #[test]
    fn test_parse_saturates() {
        let pos = parse_fragment("#/99999999999999999999999999/1");
        assert_eq!(pos, Position::new(usize::MAX, 1));
    }

    #[test]
    fn test_fragment_round_trip() {
        for position in [
            Position::new(0, 0),
            Position::new(2, 1),
            Position::new(17, 0),
            Position::new(usize::MAX, usize::MAX),
        ] {
            assert_eq!(parse_fragment(&format_fragment(position)), position);
        }
        assert_eq!(format_fragment(Position::new(2, 1)), "#/2/1");
    }
}
