// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropstage Pointer: drag gestures over a resizable box.
//!
//! This crate turns a press → move → release sequence over one of a box's
//! handles into a stream of [`PointerSample`]s in the coordinate space of
//! the box's parent. It has two parts:
//!
//! - [`zone`]: handle hit-testing. A box exposes nine hot-zones: its body
//!   (move), four corner handles and four edge strips. [`hit_test`] resolves a
//!   screen point to the [`DragMode`] of the zone under it.
//! - [`controller`]: the [`PointerController`] state machine. On press it
//!   records where inside the zone the pointer landed; on every move it
//!   emits the intended new position of the zone's reference point (the box
//!   origin for moves, the dragged corner or edge for resizes).
//!
//! The crate does not own any event loop. Callers forward raw pointer events
//! and read geometry through the [`DragSurface`] trait, which lets the
//! controller stay inert when the target or its parent is not laid out.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use cropstage_pointer::{PointerController, StaticSurface, HandleMetrics, hit_test};
//!
//! // A 200×100 box drawn at (110, 60) inside a parent whose origin is (10, 10).
//! let target = Rect::new(110.0, 60.0, 310.0, 160.0);
//! let surface = StaticSurface::new(target, Point::new(10.0, 10.0));
//! let mut pointer = PointerController::new();
//! assert!(pointer.activate(&surface));
//!
//! let press = Point::new(150.0, 100.0);
//! let zone = hit_test(target, press, &HandleMetrics::default());
//! assert!(pointer.press(&surface, press, zone));
//!
//! let sample = pointer.pointer_move(Point::new(170.0, 90.0)).unwrap();
//! // The box origin moved by (20, -10) and is reported in parent space.
//! assert_eq!(sample.origin, Point::new(120.0, 40.0));
//! assert!(sample.first);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod controller;
pub mod zone;

pub use controller::{DragSurface, GestureEnd, PointerController, PointerSample, StaticSurface};
pub use zone::{Edges, HandleMetrics, hit_test};

pub use cropstage_resize::DragMode;
