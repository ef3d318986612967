// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

/// One of the four corners of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Minimum x, minimum y.
    TopLeft,
    /// Maximum x, minimum y.
    TopRight,
    /// Minimum x, maximum y.
    BottomLeft,
    /// Maximum x, maximum y.
    BottomRight,
}

impl Corner {
    /// All corners, in handle order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The diagonally opposite corner.
    ///
    /// This is the anchor held fixed while `self` is dragged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Returns the position of this corner on `rect`.
    #[must_use]
    pub fn of(self, rect: Rect) -> Point {
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }

    /// Unit signs pointing from the opposite corner towards this one.
    pub(crate) fn direction(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomLeft => (-1.0, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// One of the four edges of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The `x0` edge.
    Left,
    /// The `y0` edge.
    Top,
    /// The `x1` edge.
    Right,
    /// The `y1` edge.
    Bottom,
}

impl Edge {
    /// All edges, in handle order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// The parallel edge on the other side of the rectangle.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// Returns `true` for the edges that move along the x axis.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the coordinate of this edge on `rect`.
    #[must_use]
    pub fn of(self, rect: Rect) -> f64 {
        match self {
            Self::Left => rect.x0,
            Self::Top => rect.y0,
            Self::Right => rect.x1,
            Self::Bottom => rect.y1,
        }
    }

    /// The midpoint of this edge on `rect`.
    #[must_use]
    pub fn midpoint(self, rect: Rect) -> Point {
        let center = rect.center();
        match self {
            Self::Left => Point::new(rect.x0, center.y),
            Self::Top => Point::new(center.x, rect.y0),
            Self::Right => Point::new(rect.x1, center.y),
            Self::Bottom => Point::new(center.x, rect.y1),
        }
    }
}

/// What a drag gesture does to its target box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Translate the whole box.
    Move,
    /// Drag a corner, anchoring the opposite one.
    Corner(Corner),
    /// Drag an edge, anchoring the opposite one.
    Edge(Edge),
}

impl DragMode {
    /// The handle name for this mode, as used by hit-testing layers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Corner(Corner::TopLeft) => "resize-tl",
            Self::Corner(Corner::TopRight) => "resize-tr",
            Self::Corner(Corner::BottomLeft) => "resize-bl",
            Self::Corner(Corner::BottomRight) => "resize-br",
            Self::Edge(Edge::Left) => "resize-l",
            Self::Edge(Edge::Top) => "resize-t",
            Self::Edge(Edge::Right) => "resize-r",
            Self::Edge(Edge::Bottom) => "resize-b",
        }
    }
}

impl fmt::Display for DragMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown handle name into a [`DragMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseDragModeError;

impl fmt::Display for ParseDragModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown drag mode name")
    }
}

impl core::error::Error for ParseDragModeError {}

impl FromStr for DragMode {
    type Err = ParseDragModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "move" => Self::Move,
            "resize-tl" => Self::Corner(Corner::TopLeft),
            "resize-tr" => Self::Corner(Corner::TopRight),
            "resize-bl" => Self::Corner(Corner::BottomLeft),
            "resize-br" => Self::Corner(Corner::BottomRight),
            "resize-l" => Self::Edge(Edge::Left),
            "resize-t" => Self::Edge(Edge::Top),
            "resize-r" => Self::Edge(Edge::Right),
            "resize-b" => Self::Edge(Edge::Bottom),
            _ => return Err(ParseDragModeError),
        })
    }
}
