// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cropstage_pointer::{
    DragMode, GestureEnd, PointerController, PointerSample, StaticSurface, hit_test,
};
use cropstage_resize::{Constraints, Resizer};
use cropstage_zoom::{ScaleTransform, ZoomSync, cover};
use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::config::{ConfigError, EditorConfig};
use crate::role::{ActiveRole, RoleChange, RoleState};

/// Geometry of both boxes after a processed event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// The crop box.
    pub crop: Rect,
    /// The displayed image box.
    pub image: Rect,
    /// The box accepting pointer input.
    pub role: ActiveRole,
}

/// Owns the crop box, the image box and the pointer state of both.
///
/// All methods take `&mut self`, so samples and toggles are processed one at
/// a time in call order.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    resizer: Resizer,
    crop: Rect,
    image_base: Rect,
    /// Crop aspect locked for corner resizes, captured per gesture.
    crop_aspect: f64,
    zoom: ZoomSync,
    role: RoleState,
    crop_pointer: PointerController,
    image_pointer: PointerController,
}

impl EditorSession {
    /// Creates a session with the crop active and the image covering it.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let crop = config.crop;
        let mut session = Self {
            resizer: config.limits.resizer(),
            crop,
            image_base: cover(crop, config.source_aspect()),
            crop_aspect: crop.width() / crop.height(),
            zoom: ZoomSync::new(),
            role: RoleState::new(),
            crop_pointer: PointerController::new(),
            image_pointer: PointerController::new(),
            config,
        };
        let surface = session.surface(ActiveRole::Crop);
        session.crop_pointer.activate(&surface);
        debug!(crop = ?session.crop, image = ?session.image_base, "editor session created");
        Ok(session)
    }

    /// The configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The crop box.
    #[must_use]
    pub fn crop(&self) -> Rect {
        self.crop
    }

    /// The image box without the pending zoom transform.
    #[must_use]
    pub fn image_base(&self) -> Rect {
        self.image_base
    }

    /// The image box as displayed.
    #[must_use]
    pub fn displayed_image(&self) -> Rect {
        self.zoom.displayed(self.image_base)
    }

    /// The pending zoom transform. Identity while the image is active.
    #[must_use]
    pub fn transform(&self) -> ScaleTransform {
        self.zoom.transform()
    }

    /// The box accepting pointer input.
    #[must_use]
    pub fn active_role(&self) -> ActiveRole {
        self.role.active()
    }

    /// Returns `true` while a drag gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller(self.role.active()).is_dragging()
    }

    /// Current geometry of both boxes.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            crop: self.crop,
            image: self.displayed_image(),
            role: self.role.active(),
        }
    }

    /// The crop box relative to the displayed image's origin.
    ///
    /// Renderers use it to cut the visible window out of the image layer.
    #[must_use]
    pub fn crop_in_image(&self) -> Rect {
        self.crop - self.displayed_image().origin().to_vec2()
    }

    /// The crop box in source image pixels.
    #[must_use]
    pub fn source_region(&self) -> Rect {
        let image = self.displayed_image();
        let scale = self.config.source_size.width / image.width();
        let local = self.crop_in_image();
        Rect::new(
            local.x0 * scale,
            local.y0 * scale,
            local.x1 * scale,
            local.y1 * scale,
        )
    }

    /// The hot-zone of the active box under screen point `point`.
    #[must_use]
    pub fn zone_at(&self, point: Point) -> Option<DragMode> {
        let surface = self.surface(self.role.active());
        let bounds = surface.target?;
        hit_test(bounds, point, &self.config.handles)
    }

    /// Starts a drag on the active box.
    ///
    /// `zone` is usually [`zone_at`](Self::zone_at) of the same point. Returns
    /// `false` if the press was ignored.
    pub fn press(&mut self, point: Point, zone: Option<DragMode>) -> bool {
        let role = self.role.active();
        let surface = self.surface(role);
        let started = self.controller_mut(role).press(&surface, point, zone);
        if started {
            debug!(role = ?role, mode = ?zone, "gesture started");
        }
        started
    }

    /// Processes a pointer move.
    ///
    /// Returns the new frame, or `None` outside a gesture.
    pub fn pointer_move(&mut self, point: Point) -> Option<Frame> {
        let role = self.role.active();
        let sample = self.controller_mut(role).pointer_move(point)?;
        if sample.first {
            self.zoom.begin_gesture(self.displayed_image());
            self.crop_aspect = self.crop.width() / self.crop.height();
        }
        match role {
            ActiveRole::Crop => self.drag_crop(sample),
            ActiveRole::Image => self.drag_image(sample),
        }
        Some(self.frame())
    }

    /// Ends the drag in flight.
    pub fn release(&mut self) -> Option<GestureEnd> {
        let role = self.role.active();
        let end = self.controller_mut(role).release()?;
        self.zoom.end_gesture();
        debug!(role = ?role, end = ?end, "gesture ended");
        Some(end)
    }

    /// Swaps the active box.
    ///
    /// The pending zoom is folded into the image base and the transform reset
    /// before the role flips. A gesture in flight on the outgoing box is
    /// abandoned as is.
    pub fn toggle_active(&mut self) -> RoleChange {
        self.image_base = self.zoom.commit(self.image_base);

        let from = self.role.active();
        if self.controller_mut(from).deactivate() {
            debug!(role = ?from, "gesture abandoned");
        }
        let change = self.role.toggle();
        let surface = self.surface(change.to);
        let active = self.controller_mut(change.to).activate(&surface);
        debug!(
            from = ?change.from,
            to = ?change.to,
            image = ?self.image_base,
            active,
            "active box toggled"
        );
        change
    }

    fn drag_crop(&mut self, sample: PointerSample) {
        let prev = self.crop;
        match sample.mode {
            DragMode::Move => {
                let next = self.resizer.move_to(prev, sample.origin, None);
                self.crop = next;
                self.image_base = self.image_base + (next.origin() - prev.origin());
            }
            DragMode::Corner(corner) => {
                let constraints = Constraints::NONE.with_aspect(self.crop_aspect);
                let next = self
                    .resizer
                    .resize_corner(prev, corner, sample.origin, &constraints);
                self.crop = next;
                if next != prev
                    && let Some(step) = self.zoom.follow_crop_resize(self.image_base, prev, next)
                {
                    trace!(ratio = step.ratio, shift = ?step.shift, "image follows crop");
                }
            }
            DragMode::Edge(edge) => {
                let next = self
                    .resizer
                    .resize_edge(prev, edge, sample.origin, &Constraints::NONE);
                self.crop = next;
                if let Some(step) = self.zoom.sync_edge(self.image_base, next, edge) {
                    trace!(
                        edge = ?edge,
                        ratio = step.ratio,
                        total = self.zoom.transform().ratio,
                        "zoom step"
                    );
                }
            }
        }
    }

    fn drag_image(&mut self, sample: PointerSample) {
        debug_assert!(
            self.zoom.transform().is_identity(),
            "the transform is committed before the image becomes active"
        );
        let constraints = Constraints::NONE
            .with_aspect(self.config.source_aspect())
            .with_inner(self.crop);
        self.image_base =
            self.resizer
                .apply(sample.mode, self.image_base, sample.origin, &constraints);
    }

    /// Screen geometry of the box playing `role`.
    fn surface(&self, role: ActiveRole) -> StaticSurface {
        let origin = self.config.stage_origin;
        let local = match role {
            ActiveRole::Crop => self.crop,
            ActiveRole::Image => self.displayed_image(),
        };
        StaticSurface::new(local + origin.to_vec2(), origin)
    }

    fn controller(&self, role: ActiveRole) -> &PointerController {
        match role {
            ActiveRole::Crop => &self.crop_pointer,
            ActiveRole::Image => &self.image_pointer,
        }
    }

    fn controller_mut(&mut self, role: ActiveRole) -> &mut PointerController {
        match role {
            ActiveRole::Crop => &mut self.crop_pointer,
            ActiveRole::Image => &mut self.image_pointer,
        }
    }
}
