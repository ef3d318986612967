// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state machine for one box.
//!
//! ## Usage
//!
//! 1) Call [`PointerController::activate`] with the box's [`DragSurface`].
//!    If the box or its parent is not laid out the controller stays inert.
//! 2) On pointer down, resolve the zone (usually with [`hit_test`](crate::hit_test))
//!    and call [`PointerController::press`].
//! 3) On every pointer move, call [`PointerController::pointer_move`] and feed
//!    the returned [`PointerSample`] to the resize engine.
//! 4) On pointer up, call [`PointerController::release`].
//!
//! A press while a gesture is in flight is ignored. Calling
//! [`PointerController::deactivate`] abandons the gesture without a final
//! sample.

use cropstage_resize::{Corner, DragMode, Edge};
use kurbo::{Point, Rect, Vec2};

/// Geometry source for the box a controller drives.
///
/// Both values are in screen space. Returning `None` means the element is
/// not currently laid out.
pub trait DragSurface {
    /// Screen bounds of the box.
    fn target_bounds(&self) -> Option<Rect>;
    /// Screen position of the origin of the box's parent.
    fn parent_origin(&self) -> Option<Point>;
}

/// A [`DragSurface`] backed by plain values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticSurface {
    /// Screen bounds of the box.
    pub target: Option<Rect>,
    /// Screen position of the parent origin.
    pub parent_origin: Option<Point>,
}

impl StaticSurface {
    /// Creates a surface with both the box and its parent laid out.
    #[must_use]
    pub fn new(target: Rect, parent_origin: Point) -> Self {
        Self {
            target: Some(target),
            parent_origin: Some(parent_origin),
        }
    }

    /// Creates a surface whose box and parent are both unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl DragSurface for StaticSurface {
    fn target_bounds(&self) -> Option<Rect> {
        self.target
    }

    fn parent_origin(&self) -> Option<Point> {
        self.parent_origin
    }
}

/// One pointer move during a drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Intended new position of the zone's reference point, in the parent's
    /// local space.
    pub origin: Point,
    /// Pointer motion since the previous event of this gesture.
    ///
    /// Provided for consumers that track raw pointer motion. Geometry
    /// follow-ups should use the change of the box they move, which already
    /// reflects clamping.
    pub delta: Vec2,
    /// Zone the gesture started on.
    pub mode: DragMode,
    /// `true` only for the first sample of the gesture.
    pub first: bool,
}

/// How a gesture finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEnd {
    /// At least one sample was emitted.
    Completed {
        /// Number of samples emitted during the gesture.
        samples: u32,
    },
    /// The pointer was released without moving.
    Cancelled,
}

/// Start and last pointer positions of a gesture.
#[derive(Clone, Copy, Debug, Default)]
struct PointerTrack {
    start: Option<Point>,
    last: Option<Point>,
}

impl PointerTrack {
    fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Records `pos` and returns the motion since the last recorded position.
    fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.start.is_none() {
            return None;
        }
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    fn end(&mut self) {
        self.start = None;
        self.last = None;
    }
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    mode: DragMode,
    /// Pointer minus reference point at press.
    grab: Vec2,
    parent_origin: Point,
    samples: u32,
}

/// Converts raw pointer events over one box into [`PointerSample`]s.
#[derive(Clone, Debug, Default)]
pub struct PointerController {
    active: bool,
    gesture: Option<Gesture>,
    track: PointerTrack,
}

/// The point of `bounds` that a drag in `mode` positions.
fn reference_point(bounds: Rect, mode: DragMode) -> Point {
    match mode {
        DragMode::Move
        | DragMode::Edge(Edge::Left | Edge::Top)
        | DragMode::Corner(Corner::TopLeft) => Point::new(bounds.x0, bounds.y0),
        DragMode::Corner(corner) => corner.of(bounds),
        DragMode::Edge(Edge::Right) => Point::new(bounds.x1, bounds.y0),
        DragMode::Edge(Edge::Bottom) => Point::new(bounds.x0, bounds.y1),
    }
}

impl PointerController {
    /// Creates an inactive controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts accepting presses if `surface` is laid out.
    ///
    /// Returns whether the controller is now active.
    pub fn activate<S: DragSurface + ?Sized>(&mut self, surface: &S) -> bool {
        self.abandon();
        self.active = surface.target_bounds().is_some() && surface.parent_origin().is_some();
        self.active
    }

    /// Stops accepting presses and abandons any gesture in flight.
    ///
    /// Returns `true` if a gesture was abandoned.
    pub fn deactivate(&mut self) -> bool {
        self.active = false;
        self.abandon()
    }

    fn abandon(&mut self) -> bool {
        self.track.end();
        self.gesture.take().is_some()
    }

    /// Returns `true` if the controller accepts presses.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` while a gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Mode of the gesture in flight.
    #[must_use]
    pub fn mode(&self) -> Option<DragMode> {
        self.gesture.map(|g| g.mode)
    }

    /// Begins a gesture at screen point `point` on `zone`.
    ///
    /// Ignored (returns `false`) when inactive, when a gesture is already in
    /// flight, when `zone` is `None`, or when `surface` is not laid out.
    pub fn press<S: DragSurface + ?Sized>(
        &mut self,
        surface: &S,
        point: Point,
        zone: Option<DragMode>,
    ) -> bool {
        if !self.active || self.gesture.is_some() {
            return false;
        }
        let Some(mode) = zone else {
            return false;
        };
        let (Some(bounds), Some(parent_origin)) =
            (surface.target_bounds(), surface.parent_origin())
        else {
            return false;
        };

        self.gesture = Some(Gesture {
            mode,
            grab: point - reference_point(bounds, mode),
            parent_origin,
            samples: 0,
        });
        self.track.start(point);
        true
    }

    /// Emits a sample for the pointer at screen point `point`.
    ///
    /// Returns `None` outside a gesture.
    pub fn pointer_move(&mut self, point: Point) -> Option<PointerSample> {
        let gesture = self.gesture.as_mut()?;
        let delta = self.track.update(point)?;
        let first = gesture.samples == 0;
        gesture.samples = gesture.samples.saturating_add(1);
        let origin = point - gesture.grab - gesture.parent_origin.to_vec2();
        Some(PointerSample {
            origin,
            delta,
            mode: gesture.mode,
            first,
        })
    }

    /// Ends the gesture in flight.
    ///
    /// Returns `None` if there was none.
    pub fn release(&mut self) -> Option<GestureEnd> {
        let gesture = self.gesture.take()?;
        self.track.end();
        Some(match gesture.samples {
            0 => GestureEnd::Cancelled,
            samples => GestureEnd::Completed { samples },
        })
    }
}
