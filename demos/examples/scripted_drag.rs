// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted editing session.
//!
//! Replays a fixed sequence of pointer gestures against an `EditorSession`
//! and prints the crop and image boxes after every sample: an outward edge
//! drag that zooms the image, a crop move that pans it, a corner resize, a
//! toggle to the image box and a couple of image drags that stop at the
//! crop.
//!
//! Run:
//! - `cargo run -p cropstage_demos --example scripted_drag`
//! - `RUST_LOG=cropstage_editor=trace cargo run -p cropstage_demos --example scripted_drag`

use cropstage_demos::{drag, init_tracing, print_frame, rect};
use cropstage_editor::{EditorConfig, EditorSession};
use kurbo::Point;

fn main() {
    init_tracing();

    let mut session = match EditorSession::new(EditorConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    print_frame("start", &session.frame());

    // Pull the right edge of the crop out past the image.
    drag(
        &mut session,
        "crop: right edge out",
        Point::new(499.0, 250.0),
        &[
            Point::new(560.0, 250.0),
            Point::new(620.0, 250.0),
            Point::new(700.0, 250.0),
        ],
    );
    println!("zoom ratio {:.4}", session.transform().ratio);

    // Move the crop; the image follows.
    drag(
        &mut session,
        "crop: move",
        Point::new(300.0, 250.0),
        &[Point::new(280.0, 240.0), Point::new(260.0, 230.0)],
    );

    // Shrink the crop from its bottom-right corner.
    let crop = session.crop();
    drag(
        &mut session,
        "crop: corner in",
        Point::new(crop.x1, crop.y1),
        &[Point::new(crop.x1 - 150.0, crop.y1 - 50.0)],
    );

    let change = session.toggle_active();
    println!("toggled {} -> {}", change.from, change.to);
    print_frame("after toggle", &session.frame());

    // Try to drag the image far to the right; it stops at the crop.
    let image = session.displayed_image();
    let center = image.center();
    drag(
        &mut session,
        "image: move right",
        center,
        &[
            Point::new(center.x + 100.0, center.y),
            Point::new(center.x + 1000.0, center.y),
        ],
    );

    // Grow the image from its top-left corner.
    let image = session.displayed_image();
    drag(
        &mut session,
        "image: corner out",
        Point::new(image.x0, image.y0),
        &[Point::new(image.x0 - 120.0, image.y0 - 40.0)],
    );

    session.toggle_active();
    print_frame("final", &session.frame());
    println!("crop inside image   {}", rect(session.crop_in_image()));
    println!("source pixel region {}", rect(session.source_region()));
}
