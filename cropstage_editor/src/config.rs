// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use cropstage_pointer::HandleMetrics;
use cropstage_resize::{DEFAULT_MIN_SIZE, Resizer};
use kurbo::{Point, Rect, Size};

/// Size limits shared by every move and resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeLimits {
    /// Smallest allowed side length of either box.
    pub min_size: f64,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl ResizeLimits {
    /// A [`Resizer`] enforcing these limits.
    #[must_use]
    pub fn resizer(&self) -> Resizer {
        Resizer::new(self.min_size)
    }
}

/// Initial state and tuning of an [`EditorSession`](crate::EditorSession).
///
/// All geometry is in stage-local units. Screen points passed to the session
/// are converted by subtracting [`stage_origin`](Self::stage_origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Initial crop box.
    pub crop: Rect,
    /// Pixel size of the source image. Its ratio is the image box aspect.
    pub source_size: Size,
    /// Screen position of the stage origin.
    pub stage_origin: Point,
    /// Minimum box size.
    pub limits: ResizeLimits,
    /// Handle sizes used for hit-testing.
    pub handles: HandleMetrics,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            crop: Rect::from_origin_size((100.0, 100.0), (400.0, 300.0)),
            source_size: Size::new(5120.0, 2880.0),
            stage_origin: Point::ZERO,
            limits: ResizeLimits::default(),
            handles: HandleMetrics::default(),
        }
    }
}

impl EditorConfig {
    /// Returns a copy with a different initial crop box.
    #[must_use]
    pub fn with_crop(mut self, crop: Rect) -> Self {
        self.crop = crop;
        self
    }

    /// Returns a copy with a different source image size.
    #[must_use]
    pub fn with_source_size(mut self, source_size: Size) -> Self {
        self.source_size = source_size;
        self
    }

    /// Returns a copy with a different stage origin.
    #[must_use]
    pub fn with_stage_origin(mut self, stage_origin: Point) -> Self {
        self.stage_origin = stage_origin;
        self
    }

    /// Returns a copy with different size limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ResizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns a copy with different handle sizes.
    #[must_use]
    pub fn with_handles(mut self, handles: HandleMetrics) -> Self {
        self.handles = handles;
        self
    }

    /// The `width / height` ratio of the source image.
    #[must_use]
    pub fn source_aspect(&self) -> f64 {
        self.source_size.width / self.source_size.height
    }

    /// Checks that the configuration describes a usable editor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_size = self.limits.min_size;
        if !(min_size.is_finite() && min_size >= 0.0) {
            return Err(ConfigError::InvalidMinSize(min_size));
        }
        let Size { width, height } = self.source_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSourceSize(self.source_size));
        }
        let crop = self.crop;
        let finite = crop.x0.is_finite()
            && crop.y0.is_finite()
            && crop.x1.is_finite()
            && crop.y1.is_finite();
        if !(finite && crop.width() > 0.0 && crop.height() > 0.0) {
            return Err(ConfigError::DegenerateCrop(crop));
        }
        Ok(())
    }
}

/// Reasons an [`EditorConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The crop box is empty, inverted, or not finite.
    DegenerateCrop(Rect),
    /// The source image has a non-positive or non-finite side.
    InvalidSourceSize(Size),
    /// The minimum box size is negative or not finite.
    InvalidMinSize(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCrop(crop) => write!(
                f,
                "crop box ({}, {}, {}, {}) has no positive finite area",
                crop.x0, crop.y0, crop.x1, crop.y1
            ),
            Self::InvalidSourceSize(size) => write!(
                f,
                "source image size {}x{} must be positive and finite",
                size.width, size.height
            ),
            Self::InvalidMinSize(min) => {
                write!(f, "minimum box size {min} must be non-negative and finite")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
