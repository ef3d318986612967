// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropstage Editor: a crop box over a zoomable image box.
//!
//! An [`EditorSession`] owns two rectangles in one stage-local space:
//!
//! - The **crop** box, the window that will be cut out of the image.
//! - The **image** box, the placement and scale of the source image behind
//!   the crop. It is held as a committed *base* plus a pending
//!   [`ScaleTransform`] produced by zoom synchronization.
//!
//! Exactly one box is active at a time (see [`ActiveRole`]). Pointer events
//! go to the active box:
//!
//! - Crop active: moving the crop pans the image along with it; corner
//!   resizes keep the crop's aspect and scale the image with it; edge resizes
//!   move one edge freely and zoom the image whenever the crop would poke out
//!   of it.
//! - Image active: the image moves and resizes with the source aspect locked
//!   and never uncovers the crop.
//!
//! [`EditorSession::toggle_active`] folds the pending transform into the
//! image base and swaps the active box.
//!
//! ## Minimal example
//!
//! ```rust
//! use cropstage_editor::{ActiveRole, EditorConfig, EditorSession};
//! use kurbo::Point;
//!
//! let mut session = EditorSession::new(EditorConfig::default()).unwrap();
//!
//! // Drag the crop's right edge from 500 out to 700.
//! let grab = Point::new(499.0, 250.0);
//! let zone = session.zone_at(grab);
//! assert!(session.press(grab, zone));
//! let frame = session.pointer_move(Point::new(699.0, 250.0)).unwrap();
//! session.release();
//!
//! assert_eq!(frame.crop.x1, 700.0);
//! assert!(session.transform().ratio > 1.0);
//! assert!(frame.image.x1 >= 700.0 - 1e-9);
//!
//! // Switch to the image box; the zoom is committed.
//! session.toggle_active();
//! assert_eq!(session.active_role(), ActiveRole::Image);
//! assert!(session.transform().is_identity());
//! ```
//!
//! Events are logged with [`tracing`]: gesture boundaries and toggles at
//! `debug`, individual zoom steps at `trace`.

mod config;
mod role;
mod session;

pub use config::{ConfigError, EditorConfig, ResizeLimits};
pub use role::{ActiveRole, RoleChange, RoleState};
pub use session::{EditorSession, Frame};

pub use cropstage_pointer::{DragMode, GestureEnd, HandleMetrics};
pub use cropstage_zoom::ScaleTransform;
