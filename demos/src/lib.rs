// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Cropstage demos.

use cropstage_editor::{EditorSession, Frame};
use kurbo::{Point, Rect};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber for the demo.
///
/// `RUST_LOG` overrides the default of `debug` for the editor crate and
/// `info` for the demos.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cropstage_editor=debug,cropstage_demos=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Formats a rectangle as `x, y, width×height`.
pub fn rect(r: Rect) -> String {
    format!("{:.1}, {:.1}, {:.1}×{:.1}", r.x0, r.y0, r.width(), r.height())
}

/// Prints one frame under `label`.
pub fn print_frame(label: &str, frame: &Frame) {
    println!(
        "{label:<28} [{}] crop {} | image {}",
        frame.role,
        rect(frame.crop),
        rect(frame.image)
    );
}

/// Drags from `from` through `path` on whatever handle lies under `from`.
///
/// Prints every frame and returns `false` if nothing was grabbed.
pub fn drag(session: &mut EditorSession, label: &str, from: Point, path: &[Point]) -> bool {
    let zone = session.zone_at(from);
    if !session.press(from, zone) {
        warn!(label, ?from, "nothing to grab");
        return false;
    }
    for &point in path {
        if let Some(frame) = session.pointer_move(point) {
            print_frame(label, &frame);
        }
    }
    let end = session.release();
    info!(label, ?end, ratio = session.transform().ratio, "scripted gesture done");
    true
}
