//! Span emission for mount, transitions, drags and releases.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use sheet_core::animation::AnimatedValue;
use sheet_core::geometry::Viewport;
use sheet_widgets::{BottomSheet, SheetConfig, SheetControl};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Default, Clone, PartialEq)]
struct SpanRecord {
    name: String,
    fields: Vec<(String, String)>,
}

impl SpanRecord {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct SheetTraceCapture {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_owned(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_owned(), format!("{value:?}")));
    }
}

impl<S> Layer<S> for SheetTraceCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::Id,
        _ctx: Context<'_, S>,
    ) {
        let name = attrs.metadata().name();
        if !name.starts_with("sheet.") {
            return;
        }
        let mut record = SpanRecord {
            name: name.to_owned(),
            fields: Vec::new(),
        };
        attrs.record(&mut FieldVisitor(&mut record.fields));
        self.spans.lock().expect("trace state lock").push(record);
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<SpanRecord> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SheetTraceCapture {
        spans: Arc::clone(&spans),
    });
    let _guard = tracing::subscriber::set_default(subscriber);
    tracing::callsite::rebuild_interest_cache();
    f();
    tracing::callsite::rebuild_interest_cache();
    let snapshot = spans.lock().expect("trace state lock").clone();
    snapshot
}

#[test]
fn lifecycle_emits_named_spans() {
    let spans = capture(|| {
        let mut sheet = BottomSheet::new(
            Viewport::new(400.0, 800.0),
            SheetConfig::default(),
            AnimatedValue::new(800.0),
        );
        sheet.mount();
        sheet.handle_drag_move(-60.0);
        sheet.handle_drag_release(-60.0);
        sheet.close(true);
    });

    let names: Vec<&str> = spans.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["sheet.mount", "sheet.drag", "sheet.release", "sheet.transition"]
    );

    let mount = &spans[0];
    assert_eq!(mount.field("settled"), Some("peek"));
    assert_eq!(mount.field("index_start"), Some("0"));

    let drag = &spans[1];
    assert_eq!(drag.field("applied"), Some("true"));

    let release = &spans[2];
    assert_eq!(release.field("destination"), Some("open"));
    assert_eq!(release.field("curve"), Some("spring"));

    let transition = &spans[3];
    assert_eq!(transition.field("operation"), Some("close"));
    assert_eq!(transition.field("curve"), Some("timing"));
    assert_eq!(transition.field("from"), Some("open"));
    assert_eq!(transition.field("to"), Some("closed"));
}

#[test]
fn negative_index_mount_is_not_animated() {
    let spans = capture(|| {
        let mut sheet = BottomSheet::new(
            Viewport::new(400.0, 800.0),
            SheetConfig::default().with_index_start(-1),
            AnimatedValue::new(0.0),
        );
        sheet.mount();
    });
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].field("settled"), Some("closed"));
    assert_eq!(spans[0].field("animated"), Some("false"));
}
