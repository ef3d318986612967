// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cropstage_resize::Edge;
use kurbo::{Rect, Vec2};

use crate::transform::ScaleTransform;

/// One incremental update folded into a [`ZoomSync`] transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep {
    /// Scale factor applied to the displayed rectangle.
    pub ratio: f64,
    /// Movement of the displayed rectangle's center.
    pub shift: Vec2,
}

/// Keeps a displayed image rectangle covering a crop rectangle.
///
/// Holds the cumulative [`ScaleTransform`] applied to the image base and the
/// start snapshot of the current gesture. The base itself is owned by the
/// caller and passed into each call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomSync {
    transform: ScaleTransform,
    start: Option<Rect>,
}

impl ZoomSync {
    /// Creates a synchronizer with an identity transform and no gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current cumulative transform.
    #[must_use]
    pub fn transform(&self) -> ScaleTransform {
        self.transform
    }

    /// Returns the displayed rectangle for `base`.
    #[must_use]
    pub fn displayed(&self, base: Rect) -> Rect {
        self.transform.apply(base)
    }

    /// Records the displayed image at the start of a drag gesture.
    pub fn begin_gesture(&mut self, displayed: Rect) {
        self.start = Some(displayed);
    }

    /// Forgets the start snapshot of the finished gesture.
    pub fn end_gesture(&mut self) {
        self.start = None;
    }

    /// Returns the start snapshot of the current gesture, if any.
    #[must_use]
    pub fn start_snapshot(&self) -> Option<Rect> {
        self.start
    }

    /// Rescales the image after `edge` of the crop was dragged to `crop`.
    ///
    /// Nothing happens unless the crop edge lies beyond the same edge of the
    /// start snapshot. Otherwise the image is scaled around the midpoint of
    /// the crop's opposite edge by exactly the ratio that puts its edge onto
    /// the crop edge. The overshoot is signed: dragging back toward the
    /// snapshot within a gesture shrinks the image again. Every step of a
    /// gesture scales about the same point and the image edge never falls
    /// inside the snapshot edge, so the image keeps containing the snapshot.
    ///
    /// Without an active gesture the displayed image itself is the reference.
    ///
    /// Only the dragged edge is considered. Bounding the step against all
    /// four sides at once would be a separate policy layered on top.
    pub fn sync_edge(&mut self, base: Rect, crop: Rect, edge: Edge) -> Option<ZoomStep> {
        let displayed = self.transform.apply(base);
        let snapshot = self.start.unwrap_or(displayed);

        let (past_snapshot, overshoot, span) = match edge {
            Edge::Left => (
                crop.x0 < snapshot.x0,
                displayed.x0 - crop.x0,
                crop.width(),
            ),
            Edge::Right => (
                crop.x1 > snapshot.x1,
                crop.x1 - displayed.x1,
                crop.width(),
            ),
            Edge::Top => (
                crop.y0 < snapshot.y0,
                displayed.y0 - crop.y0,
                crop.height(),
            ),
            Edge::Bottom => (
                crop.y1 > snapshot.y1,
                crop.y1 - displayed.y1,
                crop.height(),
            ),
        };
        if !past_snapshot {
            return None;
        }

        let remaining = span - overshoot;
        let ratio = span / remaining;
        if !(remaining > 0.0 && ratio.is_finite()) {
            return None;
        }

        let center = edge.opposite().midpoint(crop);
        let shift = self.transform.scale_about(displayed, center, ratio);
        Some(ZoomStep { ratio, shift })
    }

    /// Carries the image along with a proportional crop resize.
    ///
    /// The displayed image is scaled by `new_crop.width() / old_crop.width()`
    /// and re-centered so its offset from the crop center scales with it. The
    /// crop keeps framing the same image content.
    pub fn follow_crop_resize(
        &mut self,
        base: Rect,
        old_crop: Rect,
        new_crop: Rect,
    ) -> Option<ZoomStep> {
        let ratio = new_crop.width() / old_crop.width();
        if !(old_crop.width() > 0.0 && ratio.is_finite() && ratio > 0.0) {
            return None;
        }

        let displayed = self.transform.apply(base);
        let old_center = displayed.center();
        let new_center = new_crop.center() + (old_center - old_crop.center()) * ratio;
        let shift = new_center - old_center;
        self.transform.offset += shift;
        self.transform.ratio *= ratio;
        Some(ZoomStep { ratio, shift })
    }

    /// Folds the transform into `base` and resets it to identity.
    ///
    /// Returns the new base, equal to the displayed rectangle before the call.
    pub fn commit(&mut self, base: Rect) -> Rect {
        let displayed = self.transform.apply(base);
        self.transform = ScaleTransform::IDENTITY;
        self.start = None;
        displayed
    }
}
