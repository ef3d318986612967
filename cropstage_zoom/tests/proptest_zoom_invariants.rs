// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for zoom synchronization.
//!
//! 1. Dragging one crop edge outward keeps the displayed image covering the crop.
//! 2. The zoom ratio never shrinks during an outward edge drag.
//! 3. Once the edge ends past the snapshot, the result depends only on where
//!    it ends, not on how far it travelled before coming back.
//! 4. Following a proportional crop resize keeps the crop's relative position.
//! 5. Committing yields the displayed rectangle and an identity transform.

use cropstage_resize::{Edge, Rect};
use cropstage_zoom::{ScaleTransform, ZoomSync, cover};
use kurbo::Vec2;
use proptest::prelude::*;

fn crop_strategy() -> impl Strategy<Value = Rect> {
    (-200.0..200.0f64, -200.0..200.0f64, 200.0..600.0f64, 200.0..600.0f64)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size((x, y), (w, h)))
}

fn edge_strategy() -> impl Strategy<Value = Edge> {
    prop_oneof![
        Just(Edge::Left),
        Just(Edge::Top),
        Just(Edge::Right),
        Just(Edge::Bottom),
    ]
}

/// Moves `edge` of `crop` outward by `step`.
fn push(crop: Rect, edge: Edge, step: f64) -> Rect {
    match edge {
        Edge::Left => Rect::new(crop.x0 - step, crop.y0, crop.x1, crop.y1),
        Edge::Top => Rect::new(crop.x0, crop.y0 - step, crop.x1, crop.y1),
        Edge::Right => Rect::new(crop.x0, crop.y0, crop.x1 + step, crop.y1),
        Edge::Bottom => Rect::new(crop.x0, crop.y0, crop.x1, crop.y1 + step),
    }
}

/// Distance from `edge` of `crop` outward to the same edge of `image`.
fn slack(image: Rect, crop: Rect, edge: Edge) -> f64 {
    match edge {
        Edge::Left => crop.x0 - image.x0,
        Edge::Top => crop.y0 - image.y0,
        Edge::Right => image.x1 - crop.x1,
        Edge::Bottom => image.y1 - crop.y1,
    }
}

fn covers(outer: Rect, inner: Rect) -> bool {
    let eps = 1e-9 * outer.width().max(outer.height()).max(1.0);
    outer.x0 <= inner.x0 + eps
        && outer.y0 <= inner.y0 + eps
        && outer.x1 >= inner.x1 - eps
        && outer.y1 >= inner.y1 - eps
}

proptest! {
    #[test]
    fn outward_edge_drag_keeps_cover(
        crop in crop_strategy(),
        aspect in 0.5..3.0f64,
        edge in edge_strategy(),
        steps in prop::collection::vec(0.0..60.0f64, 1..40),
    ) {
        let base = cover(crop, aspect);
        let mut zoom = ZoomSync::new();
        zoom.begin_gesture(zoom.displayed(base));

        let mut crop = crop;
        let mut last_ratio = zoom.transform().ratio;
        for step in steps {
            crop = push(crop, edge, step);
            let _ = zoom.sync_edge(base, crop, edge);
            let displayed = zoom.displayed(base);
            prop_assert!(covers(displayed, crop), "{:?} does not cover {:?}", displayed, crop);
            prop_assert!(zoom.transform().ratio >= last_ratio);
            last_ratio = zoom.transform().ratio;
        }
    }

    #[test]
    fn edge_drag_is_path_independent(
        crop in crop_strategy(),
        aspect in 0.5..3.0f64,
        edge in edge_strategy(),
        past in 1.0..300.0f64,
        detour in 0.0..400.0f64,
    ) {
        let base = cover(crop, aspect);
        // The final edge lies beyond the snapshot, so the last sample applies.
        let end = slack(base, crop, edge) + past;
        let target = push(crop, edge, end);

        let mut direct = ZoomSync::new();
        direct.begin_gesture(direct.displayed(base));
        let _ = direct.sync_edge(base, target, edge);

        let mut zoom = ZoomSync::new();
        zoom.begin_gesture(zoom.displayed(base));
        let _ = zoom.sync_edge(base, push(crop, edge, end + detour), edge);
        let _ = zoom.sync_edge(base, target, edge);

        let (a, b) = (zoom.displayed(base), direct.displayed(base));
        let eps = 1e-9 * a.width().max(a.height());
        prop_assert!(
            (a.x0 - b.x0).abs() < eps
                && (a.y0 - b.y0).abs() < eps
                && (a.x1 - b.x1).abs() < eps
                && (a.y1 - b.y1).abs() < eps,
            "{:?} vs {:?}", a, b
        );
        prop_assert!(covers(a, target), "{:?} does not cover {:?}", a, target);
    }

    #[test]
    fn follow_resize_keeps_relative_position(
        crop in crop_strategy(),
        aspect in 0.5..3.0f64,
        pan in (-0.9..0.9f64, -0.9..0.9f64),
        factor in 0.3..3.0f64,
    ) {
        let fitted = cover(crop, aspect);
        // Slide the image without uncovering the crop.
        let slack = (fitted.width() - crop.width(), fitted.height() - crop.height());
        let base = fitted + Vec2::new(slack.0 * pan.0 * 0.5, slack.1 * pan.1 * 0.5);
        let mut zoom = ZoomSync::new();

        let next = Rect::from_origin_size(
            crop.origin(),
            (crop.width() * factor, crop.height() * factor),
        );
        let step = zoom.follow_crop_resize(base, crop, next);
        prop_assert!(step.is_some());

        let after = zoom.displayed(base);
        let rel = |image: Rect, crop: Rect| {
            ((crop.x0 - image.x0) / image.width(), (crop.y0 - image.y0) / image.height())
        };
        let (bx, by) = rel(base, crop);
        let (ax, ay) = rel(after, next);
        prop_assert!((bx - ax).abs() < 1e-9 && (by - ay).abs() < 1e-9);
        prop_assert!(covers(after, next), "{:?} does not cover {:?}", after, next);
    }

    #[test]
    fn commit_folds_transform(
        crop in crop_strategy(),
        aspect in 0.5..3.0f64,
        step in 1.0..150.0f64,
    ) {
        let base = cover(crop, aspect);
        let mut zoom = ZoomSync::new();
        zoom.begin_gesture(zoom.displayed(base));
        let _ = zoom.sync_edge(base, push(crop, Edge::Right, step), Edge::Right);

        let displayed = zoom.displayed(base);
        let new_base = zoom.commit(base);
        prop_assert_eq!(new_base, displayed);
        prop_assert_eq!(zoom.transform(), ScaleTransform::IDENTITY);
        prop_assert_eq!(zoom.start_snapshot(), None);
    }
}
