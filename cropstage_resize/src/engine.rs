// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::mode::{Corner, DragMode, Edge};

/// Minimum side length used by [`Resizer::default`].
pub const DEFAULT_MIN_SIZE: f64 = 100.0;

/// Optional constraints applied to a single move or resize.
///
/// Both fields are consulted per call, so callers can derive them from the
/// latest state of whatever the box is bound to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Fixed `width / height` ratio for corner and edge resizes.
    ///
    /// Non-finite or non-positive values are ignored.
    pub aspect: Option<f64>,
    /// A rectangle the result must keep covering.
    pub inner: Option<Rect>,
}

impl Constraints {
    /// No aspect lock and no containment.
    pub const NONE: Self = Self {
        aspect: None,
        inner: None,
    };

    /// Returns a copy with the given aspect lock.
    #[must_use]
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Returns a copy that must keep covering `inner`.
    #[must_use]
    pub fn with_inner(mut self, inner: Rect) -> Self {
        self.inner = Some(inner);
        self
    }

    fn usable_aspect(&self) -> Option<f64> {
        self.aspect.filter(|a| a.is_finite() && *a > 0.0)
    }
}

/// Move and resize operations sharing a minimum side length.
///
/// Every method is pure: it maps the previous rectangle and a pointer
/// position to a new rectangle and never fails. Degenerate input is clamped
/// to the minimum size or, when the pointer is not finite, answered with the
/// previous rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resizer {
    min_size: f64,
}

impl Default for Resizer {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl Resizer {
    /// Creates a resizer with the given minimum side length.
    ///
    /// Non-finite or negative values fall back to [`DEFAULT_MIN_SIZE`].
    #[must_use]
    pub fn new(min_size: f64) -> Self {
        let mut resizer = Self::default();
        resizer.set_min_size(min_size);
        resizer
    }

    /// Returns the minimum side length.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Sets the minimum side length.
    ///
    /// Non-finite or negative values fall back to [`DEFAULT_MIN_SIZE`].
    pub fn set_min_size(&mut self, min_size: f64) {
        self.min_size = if min_size.is_finite() && min_size >= 0.0 {
            min_size
        } else {
            DEFAULT_MIN_SIZE
        };
    }

    /// Applies `mode` to `prev` for a pointer sample at `point`.
    ///
    /// For [`DragMode::Move`], `point` is the intended new origin; for
    /// resizes it is the intended new position of the dragged corner or edge.
    #[must_use]
    pub fn apply(
        &self,
        mode: DragMode,
        prev: Rect,
        point: Point,
        constraints: &Constraints,
    ) -> Rect {
        match mode {
            DragMode::Move => self.move_to(prev, point, constraints.inner),
            DragMode::Corner(corner) => self.resize_corner(prev, corner, point, constraints),
            DragMode::Edge(edge) => self.resize_edge(prev, edge, point, constraints),
        }
    }

    /// Moves `prev` so its origin lands on `origin`, keeping its size.
    ///
    /// With `inner`, each axis is first pushed so the far edge still reaches
    /// `inner`'s far edge and then clamped so the near edge does not pass
    /// `inner`'s near edge. The near clamp is applied last and wins when
    /// `prev` is smaller than `inner`.
    #[must_use]
    pub fn move_to(&self, prev: Rect, origin: Point, inner: Option<Rect>) -> Rect {
        if !origin.is_finite() {
            return prev;
        }
        let size = prev.size();
        let (mut x, mut y) = (origin.x, origin.y);
        if let Some(inner) = inner {
            if x + size.width < inner.x1 {
                x = inner.x1 - size.width;
            }
            if y + size.height < inner.y1 {
                y = inner.y1 - size.height;
            }
            x = x.min(inner.x0);
            y = y.min(inner.y0);
        }
        Rect::from_origin_size((x, y), size)
    }

    /// Drags `corner` of `prev` towards `point`, anchoring the opposite corner.
    ///
    /// Without an aspect lock each axis follows the pointer independently.
    /// With one, the pointer is projected onto the box diagonal so the result
    /// keeps the ratio exactly. In both cases the size is floored at the
    /// minimum side length and, with `inner`, at the distance from the anchor
    /// to `inner`'s far edges.
    #[must_use]
    pub fn resize_corner(
        &self,
        prev: Rect,
        corner: Corner,
        point: Point,
        constraints: &Constraints,
    ) -> Rect {
        if !point.is_finite() {
            return prev;
        }
        let anchor = corner.opposite().of(prev);
        let (sx, sy) = corner.direction();
        let delta = point - anchor;

        let mut min_w = self.min_size;
        let mut min_h = self.min_size;
        if let Some(inner) = constraints.inner {
            let reach = corner.of(inner) - anchor;
            min_w = min_w.max(reach.x * sx);
            min_h = min_h.max(reach.y * sy);
        }

        let far = match constraints.usable_aspect() {
            Some(aspect) => {
                let diagonal = (aspect * aspect + 1.0).sqrt();
                let projection = ((delta.x * aspect * sx + delta.y * sy) / diagonal).abs();
                let mut width = projection * aspect / diagonal;
                let mut height = projection / diagonal;

                // The tighter axis decides; the looser one follows the ratio.
                let min_w = min_w.max(min_h * aspect);
                if width < min_w {
                    width = min_w;
                    height = width / aspect;
                }
                Point::new(anchor.x + sx * width, anchor.y + sy * height)
            }
            None => {
                let x = if delta.x * sx < min_w {
                    anchor.x + sx * min_w
                } else {
                    point.x
                };
                let y = if delta.y * sy < min_h {
                    anchor.y + sy * min_h
                } else {
                    point.y
                };
                Point::new(x, y)
            }
        };

        Rect::from_points(anchor, far)
    }

    /// Drags `edge` of `prev` towards `point`, anchoring the opposite edge.
    ///
    /// The pointer coordinate along the edge is ignored: the resize is routed
    /// through the adjacent corner with that coordinate pinned to the current
    /// box. Callers that want the edge to move freely on its own axis pass
    /// constraints without an aspect lock.
    #[must_use]
    pub fn resize_edge(
        &self,
        prev: Rect,
        edge: Edge,
        point: Point,
        constraints: &Constraints,
    ) -> Rect {
        let (corner, pinned) = match edge {
            Edge::Left => (Corner::TopLeft, Point::new(point.x, prev.y0)),
            Edge::Top => (Corner::TopLeft, Point::new(prev.x0, point.y)),
            Edge::Right => (Corner::BottomRight, Point::new(point.x, prev.y1)),
            Edge::Bottom => (Corner::BottomRight, Point::new(prev.x1, point.y)),
        };
        self.resize_corner(prev, corner, pinned, constraints)
    }
}
