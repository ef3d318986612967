// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checks the log events an editing session emits.

use std::sync::{Arc, Mutex};

use cropstage_editor::{DragMode, EditorConfig, EditorSession};
use cropstage_resize::Edge;
use kurbo::Point;
use tracing::{Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<Captured>>>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name().to_owned(), format!("{value:?}")));
        }
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields.push((field.name().to_owned(), value.to_string()));
    }
}

impl<S> Layer<S> for EventCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().expect("event lock").push(Captured {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn with_capture(run: impl FnOnce()) -> Vec<Captured> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    tracing::subscriber::with_default(subscriber, || {
        tracing::callsite::rebuild_interest_cache();
        run();
    });
    events.lock().expect("event lock").clone()
}

#[test]
fn edge_drag_logs_gesture_and_zoom_steps() {
    let events = with_capture(|| {
        let mut session = EditorSession::new(EditorConfig::default()).unwrap();
        assert!(session.press(Point::new(500.0, 250.0), Some(DragMode::Edge(Edge::Right))));
        session.pointer_move(Point::new(600.0, 250.0));
        session.pointer_move(Point::new(700.0, 250.0));
        session.release();
    });

    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "editor session created",
            "gesture started",
            "zoom step",
            "zoom step",
            "gesture ended"
        ]
    );

    let started = &events[1];
    assert_eq!(started.level, Level::DEBUG);
    assert_eq!(started.field("role"), Some("Crop"));
    assert_eq!(started.field("mode"), Some("Some(Edge(Right))"));

    let step = &events[2];
    assert_eq!(step.level, Level::TRACE);
    assert_eq!(step.field("edge"), Some("Right"));
    let ratio: f64 = step.field("ratio").unwrap().parse().unwrap();
    assert!(ratio > 1.0);

    assert_eq!(
        events[4].field("end"),
        Some("Completed { samples: 2 }")
    );
}

#[test]
fn toggle_logs_roles_and_abandoned_gesture() {
    let events = with_capture(|| {
        let mut session = EditorSession::new(EditorConfig::default()).unwrap();
        assert!(session.press(Point::new(300.0, 250.0), Some(DragMode::Move)));
        session.pointer_move(Point::new(310.0, 250.0));
        session.toggle_active();
    });

    let abandoned = events
        .iter()
        .find(|e| e.message == "gesture abandoned")
        .expect("abandon event");
    assert_eq!(abandoned.field("role"), Some("Crop"));

    let toggled = events
        .iter()
        .find(|e| e.message == "active box toggled")
        .expect("toggle event");
    assert_eq!(toggled.level, Level::DEBUG);
    assert_eq!(toggled.field("from"), Some("Crop"));
    assert_eq!(toggled.field("to"), Some("Image"));
    assert_eq!(toggled.field("active"), Some("true"));
}
