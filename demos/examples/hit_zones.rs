// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle hit-testing map.
//!
//! Prints which drag mode `hit_test` reports around the corners and along
//! the edges of a small box, using exaggerated handle sizes so the zones are
//! visible in a character grid.
//!
//! Run:
//! - `cargo run -p cropstage_demos --example hit_zones`

use cropstage_pointer::{DragMode, HandleMetrics, hit_test};
use kurbo::{Point, Rect};

fn glyph(mode: Option<DragMode>) -> char {
    match mode.map(DragMode::name) {
        None => '.',
        Some("move") => ' ',
        Some("resize-l" | "resize-r") => '|',
        Some("resize-t" | "resize-b") => '-',
        Some(_) => '#',
    }
}

fn main() {
    let bounds = Rect::new(4.0, 2.0, 36.0, 14.0);
    let metrics = HandleMetrics {
        corner_size: 4.0,
        edge_thickness: 1.0,
    };

    for y in 0..17 {
        let row: String = (0..41)
            .map(|x| {
                let point = Point::new(f64::from(x), f64::from(y));
                glyph(hit_test(bounds, point, &metrics))
            })
            .collect();
        println!("{row}");
    }

    for (label, point) in [
        ("inside", Point::new(20.0, 8.0)),
        ("top-left handle", Point::new(3.0, 1.0)),
        ("right strip", Point::new(35.5, 8.0)),
        ("outside", Point::new(40.0, 8.0)),
    ] {
        let mode = hit_test(bounds, point, &metrics);
        println!("{label:<16} {:?}", mode.map(DragMode::name));
    }
}
