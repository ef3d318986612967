// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Uniform scale around a rectangle's own center, then a translation.
///
/// Applied to a base rectangle this yields the displayed rectangle:
/// the size is multiplied by `ratio` and the center moved by `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    /// Translation of the center, applied after scaling.
    pub offset: Vec2,
    /// Uniform scale factor. Always positive.
    pub ratio: f64,
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScaleTransform {
    /// No scale and no translation.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        ratio: 1.0,
    };

    /// Creates a transform from a translation and a ratio.
    #[must_use]
    pub fn new(dx: f64, dy: f64, ratio: f64) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            ratio,
        }
    }

    /// Returns `true` if applying this transform leaves rectangles unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.offset == Vec2::ZERO && self.ratio == 1.0
    }

    /// Applies the transform to `base`.
    #[must_use]
    pub fn apply(&self, base: Rect) -> Rect {
        if self.is_identity() {
            return base;
        }
        Rect::from_center_size(base.center() + self.offset, base.size() * self.ratio)
    }

    /// The affine map taking points of `base` to the displayed rectangle.
    ///
    /// Renderers use this to place image content authored against the base
    /// rectangle.
    #[must_use]
    pub fn to_affine(&self, base: Rect) -> Affine {
        let center = base.center().to_vec2();
        Affine::translate(center + self.offset)
            * Affine::scale(self.ratio)
            * Affine::translate(-center)
    }

    /// Scales the displayed rectangle by `step` around `center`.
    ///
    /// `displayed` must be this transform applied to the base. Returns the
    /// shift of the displayed center.
    pub(crate) fn scale_about(&mut self, displayed: Rect, center: Point, step: f64) -> Vec2 {
        let old_center = displayed.center();
        let new_center = center + (old_center - center) * step;
        let shift = new_center - old_center;
        self.offset += shift;
        self.ratio *= step;
        shift
    }
}

/// The smallest rectangle of the given aspect that covers `crop`.
///
/// The result matches `crop` exactly along the constraining axis and is
/// centered on the other one. A non-finite or non-positive aspect yields
/// `crop` itself.
#[must_use]
pub fn cover(crop: Rect, aspect: f64) -> Rect {
    if !(aspect.is_finite() && aspect > 0.0) || crop.height() <= 0.0 {
        return crop;
    }
    if crop.width() / crop.height() > aspect {
        let height = crop.width() / aspect;
        let y0 = crop.y0 - (height - crop.height()) / 2.0;
        Rect::new(crop.x0, y0, crop.x1, y0 + height)
    } else {
        let width = crop.height() * aspect;
        let x0 = crop.x0 - (width - crop.width()) / 2.0;
        Rect::new(x0, crop.y0, x0 + width, crop.y1)
    }
}
