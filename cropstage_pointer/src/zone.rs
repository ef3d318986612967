// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle hit-testing for resizable boxes.
//!
//! A box has three kinds of hot-zones:
//!
//! - Corner handles: squares of side [`HandleMetrics::corner_size`] centered
//!   on each corner, so they reach outside the box.
//! - Edge strips: bands of [`HandleMetrics::edge_thickness`] just inside each
//!   edge.
//! - The body: everything else inside the box.
//!
//! Corner handles take priority over edge strips, which take priority over
//! the body.

use bitflags::bitflags;
use cropstage_resize::{Corner, DragMode, Edge};
use kurbo::{Point, Rect};

/// Sizes of the interactive handles drawn on a box, in screen units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleMetrics {
    /// Side length of the square corner handles.
    pub corner_size: f64,
    /// Thickness of the edge strips.
    pub edge_thickness: f64,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self {
            corner_size: 10.0,
            edge_thickness: 2.0,
        }
    }
}

bitflags! {
    /// Set of box edges touched by a point.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// The `x0` edge.
        const LEFT = 1;
        /// The `y0` edge.
        const TOP = 1 << 1;
        /// The `x1` edge.
        const RIGHT = 1 << 2;
        /// The `y1` edge.
        const BOTTOM = 1 << 3;
    }
}

impl Edges {
    /// The drag mode for a point touching exactly these edges.
    ///
    /// No edges means the body. Two adjacent edges mean their shared corner.
    /// When a box is thinner than two strips, the left and top strips win
    /// over the right and bottom ones.
    #[must_use]
    pub fn mode(self) -> DragMode {
        let mut edges = self;
        if edges.contains(Self::LEFT | Self::RIGHT) {
            edges.remove(Self::RIGHT);
        }
        if edges.contains(Self::TOP | Self::BOTTOM) {
            edges.remove(Self::BOTTOM);
        }
        let horizontal = edges & (Self::LEFT | Self::RIGHT);
        let vertical = edges & (Self::TOP | Self::BOTTOM);
        match (horizontal, vertical) {
            (Self::LEFT, Self::TOP) => DragMode::Corner(Corner::TopLeft),
            (Self::RIGHT, Self::TOP) => DragMode::Corner(Corner::TopRight),
            (Self::LEFT, Self::BOTTOM) => DragMode::Corner(Corner::BottomLeft),
            (Self::RIGHT, Self::BOTTOM) => DragMode::Corner(Corner::BottomRight),
            (Self::LEFT, _) => DragMode::Edge(Edge::Left),
            (Self::RIGHT, _) => DragMode::Edge(Edge::Right),
            (_, Self::TOP) => DragMode::Edge(Edge::Top),
            (_, Self::BOTTOM) => DragMode::Edge(Edge::Bottom),
            _ => DragMode::Move,
        }
    }
}

impl From<Edge> for Edges {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Left => Self::LEFT,
            Edge::Top => Self::TOP,
            Edge::Right => Self::RIGHT,
            Edge::Bottom => Self::BOTTOM,
        }
    }
}

impl From<Corner> for Edges {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => Self::LEFT | Self::TOP,
            Corner::TopRight => Self::RIGHT | Self::TOP,
            Corner::BottomLeft => Self::LEFT | Self::BOTTOM,
            Corner::BottomRight => Self::RIGHT | Self::BOTTOM,
        }
    }
}

/// Returns the drag mode of the hot-zone of `bounds` under `point`.
///
/// `None` means the point misses the box and all of its handles.
#[must_use]
pub fn hit_test(bounds: Rect, point: Point, metrics: &HandleMetrics) -> Option<DragMode> {
    let half = metrics.corner_size / 2.0;
    for corner in Corner::ALL {
        let at = corner.of(bounds);
        if (point.x - at.x).abs() <= half && (point.y - at.y).abs() <= half {
            return Some(DragMode::Corner(corner));
        }
    }

    let inside = point.x >= bounds.x0
        && point.x <= bounds.x1
        && point.y >= bounds.y0
        && point.y <= bounds.y1;
    if !inside {
        return None;
    }

    let strip = metrics.edge_thickness;
    let mut edges = Edges::empty();
    edges.set(Edges::LEFT, point.x - bounds.x0 < strip);
    edges.set(Edges::RIGHT, bounds.x1 - point.x < strip);
    edges.set(Edges::TOP, point.y - bounds.y0 < strip);
    edges.set(Edges::BOTTOM, bounds.y1 - point.y < strip);
    Some(edges.mode())
}
