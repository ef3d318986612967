// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropstage Zoom: keep an image rectangle covering a crop rectangle.
//!
//! The image placed behind a crop window is stored as a *base* rectangle plus
//! a cumulative [`ScaleTransform`]: a uniform scale around the base's own
//! center followed by a translation. The rectangle shown to the user is the
//! *displayed* one, `transform.apply(base)`.
//!
//! [`ZoomSync`] owns that transform and updates it incrementally while the
//! crop window is edited:
//!
//! - [`ZoomSync::sync_edge`] grows the image when a crop edge is dragged past
//!   the image, scaling around the midpoint of the opposite crop edge so the
//!   side already covered stays covered.
//! - [`ZoomSync::follow_crop_resize`] carries the image along with a
//!   proportional crop resize so the crop keeps framing the same content.
//! - [`ZoomSync::commit`] folds the transform into the base and resets it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use cropstage_resize::Edge;
//! use cropstage_zoom::{ZoomSync, cover};
//!
//! let crop = Rect::new(100.0, 100.0, 500.0, 400.0);
//! let base = cover(crop, 5120.0 / 2880.0);
//!
//! let mut zoom = ZoomSync::new();
//! zoom.begin_gesture(zoom.displayed(base));
//!
//! // Drag the crop's right edge out to x = 700.
//! let wider = Rect::new(100.0, 100.0, 700.0, 400.0);
//! let step = zoom.sync_edge(base, wider, Edge::Right).unwrap();
//! assert!(step.ratio > 1.0);
//! assert!(zoom.displayed(base).x1 >= 700.0 - 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod sync;
mod transform;

pub use sync::{ZoomStep, ZoomSync};
pub use transform::{ScaleTransform, cover};
