//! Plot Paths
//!
//! Folds pen events into move/line segments, the shape a drawing backend
//! consumes. Coordinates are passed through untouched: no units, no axis
//! flips, no styling.

use std::fmt;

use crate::error::ParseError;
use crate::parser::{Pair, PenEvent, PenKind};

/// One drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    MoveTo(Pair),
    LineTo(Pair),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::MoveTo((x, y)) => write!(f, "M {x} {y}"),
            Segment::LineTo((x, y)) => write!(f, "L {x} {y}"),
        }
    }
}

/// Segments traced by a sequence of pen events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotPath {
    segments: Vec<Segment>,
    position: Pair,
}

impl PlotPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from a scan, stopping at the first error
    pub fn from_events<I>(events: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Result<PenEvent, ParseError>>,
    {
        let mut path = Self::new();
        for event in events {
            path.push(&event?);
        }
        Ok(path)
    }

    /// Apply one event: Pen Up pairs move, Pen Down pairs draw
    pub fn push(&mut self, event: &PenEvent) {
        for &pair in &event.pairs {
            match event.kind {
                PenKind::PenUp => self.move_to(pair),
                PenKind::PenDown => self.line_to(pair),
            }
        }
    }

    fn move_to(&mut self, pair: Pair) {
        // A move followed by another move is a no-op
        match self.segments.last_mut() {
            Some(Segment::MoveTo(last)) => *last = pair,
            _ => self.segments.push(Segment::MoveTo(pair)),
        }
        self.position = pair;
    }

    fn line_to(&mut self, pair: Pair) {
        if self.segments.is_empty() {
            self.segments.push(Segment::MoveTo(self.position));
        }
        self.segments.push(Segment::LineTo(pair));
        self.position = pair;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current pen position, starting at the plotter origin
    pub fn position(&self) -> Pair {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// SVG-style path data, e.g. "M 0 0 L 10 0"
impl fmt::Display for PlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_collapse() {
        let mut path = PlotPath::new();
        path.push(&PenEvent::new(PenKind::PenUp, vec![(1, 1), (5, 5)]));
        path.push(&PenEvent::new(PenKind::PenUp, vec![(10, 10)]));
        assert_eq!(path.segments(), [Segment::MoveTo((10, 10))]);
        assert_eq!(path.position(), (10, 10));
    }

    #[test]
    fn test_line_starts_at_origin() {
        let mut path = PlotPath::new();
        path.push(&PenEvent::new(PenKind::PenDown, vec![(3, 4)]));
        assert_eq!(path.to_string(), "M 0 0 L 3 4");
    }

    #[test]
    fn test_events_without_pairs_draw_nothing() {
        let mut path = PlotPath::new();
        path.push(&PenEvent::new(PenKind::PenDown, vec![]));
        path.push(&PenEvent::new(PenKind::PenUp, vec![]));
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_from_events_propagates_error() {
        let events = vec![
            Ok(PenEvent::new(PenKind::PenDown, vec![(1, 1)])),
            Err(ParseError::EmptyDocument),
        ];
        assert_eq!(
            PlotPath::from_events(events),
            Err(ParseError::EmptyDocument)
        );
    }
}
