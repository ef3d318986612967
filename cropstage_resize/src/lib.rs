// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropstage Resize: constraint-aware move and resize geometry.
//!
//! This crate turns a pointer position into a new rectangle for each of the
//! nine interaction modes of a resizable box: moving the body, dragging one of
//! the four corners, or dragging one of the four edges. Every operation is a
//! pure function of the previous rectangle, the pointer, and an optional set
//! of [`Constraints`]:
//!
//! - A fixed aspect ratio (`width / height`), which locks corner resizes to
//!   the box diagonal.
//! - A containing rectangle (`inner`) that the result must keep covering.
//! - A minimum side length from [`Resizer`] (100 units unless configured).
//!
//! Corner resizes pin the opposite corner. Because rectangles are stored in
//! edge form ([`kurbo::Rect`]), that anchor is bit-identical before and after
//! the operation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use cropstage_resize::{Constraints, Corner, Resizer};
//!
//! let resizer = Resizer::default();
//! let prev = Rect::new(0.0, 0.0, 200.0, 100.0);
//!
//! // Drag the top-left corner with a 2:1 aspect lock.
//! let next = resizer.resize_corner(
//!     prev,
//!     Corner::TopLeft,
//!     Point::new(50.0, 80.0),
//!     &Constraints::NONE.with_aspect(2.0),
//! );
//!
//! assert_eq!((next.x1, next.y1), (200.0, 100.0));
//! assert!((next.width() / next.height() - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Modes by name
//!
//! [`DragMode`] round-trips through the handle names used by hit-testing
//! layers (`"move"`, `"resize-tl"`, `"resize-r"`, ...):
//!
//! ```rust
//! use cropstage_resize::{DragMode, Edge};
//!
//! let mode: DragMode = "resize-r".parse().unwrap();
//! assert_eq!(mode, DragMode::Edge(Edge::Right));
//! assert_eq!(mode.name(), "resize-r");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
mod mode;

pub use engine::{Constraints, DEFAULT_MIN_SIZE, Resizer};
pub use mode::{Corner, DragMode, Edge, ParseDragModeError};

pub use kurbo::{Point, Rect};
