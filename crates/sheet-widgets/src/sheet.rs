#![forbid(unsafe_code)]

//! The bottom sheet state machine.
//!
//! [`BottomSheet`] pairs the animated offset (held by an [`AnimationDriver`])
//! with the settled position and routes drags, releases and imperative
//! calls between them. The imperative operations live on
//! [`crate::SheetControl`].
//!
//! # Invariants
//!
//! 1. The settled position is updated in the same call that requests the
//!    animation, never when the animation completes.
//! 2. Drag moves write the offset directly and leave the settled position
//!    alone; releases and imperative calls always update it.
//! 3. Drag-move offsets stay within `[0, closed_offset]`.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sheet_core::animation::AnimatedValue;
//! use sheet_core::geometry::Viewport;
//! use sheet_widgets::{BottomSheet, SheetConfig, SheetControl, SheetPosition};
//!
//! let viewport = Viewport::new(400.0, 800.0);
//! let mut sheet = BottomSheet::new(viewport, SheetConfig::default(), AnimatedValue::new(800.0));
//! sheet.mount();
//! assert_eq!(sheet.settled(), SheetPosition::Peek);
//!
//! sheet.second_position(false);
//! assert_eq!(sheet.settled(), SheetPosition::Open);
//! sheet.driver_mut().settle(Duration::from_millis(16), 100);
//! assert_eq!(sheet.offset(), 0.0);
//! ```

use sheet_core::animation::AnimatedValue;
#[cfg(feature = "tracing")]
use sheet_core::animation::Curve;
use sheet_core::event::{PointerEvent, PointerKind};
use sheet_core::geometry::Viewport;
use sheet_core::gesture::{DragEvent, DragTracker};

use crate::config::SheetConfig;
use crate::driver::AnimationDriver;
use crate::filter::GestureFilter;
use crate::layout::SheetLayout;
use crate::position::SheetPosition;
use crate::surface::SheetFrame;

/// A draggable panel snapping between open, peek and closed.
#[derive(Debug, Clone)]
pub struct BottomSheet<D = AnimatedValue> {
    layout: SheetLayout,
    config: SheetConfig,
    filter: GestureFilter,
    driver: D,
    settled: SheetPosition,
    tracker: DragTracker,
    pointer_active: bool,
    mounted: bool,
}

impl<D: AnimationDriver> BottomSheet<D> {
    /// Create a sheet for `viewport`.
    ///
    /// Layout constants are derived here once. The driver's current value
    /// is left untouched until [`mount`](Self::mount).
    #[must_use]
    pub fn new(viewport: Viewport, config: SheetConfig, driver: D) -> Self {
        let layout = SheetLayout::for_viewport(viewport);
        let filter = GestureFilter::new(config.enable_pan_down_to_close);
        Self {
            layout,
            tracker: DragTracker::new(filter.threshold()),
            filter,
            config,
            driver,
            settled: SheetPosition::Peek,
            pointer_active: false,
            mounted: false,
        }
    }

    /// Apply the initial position selected by `index_start`.
    ///
    /// Negative → closed with the offset snapped, no animation. `0` → spring
    /// to peek. Anything else → spring to open. Only the first call has an
    /// effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let position = SheetPosition::from_index_start(self.config.index_start);
        self.trace_mount(position);
        match position {
            SheetPosition::Closed => self.driver.set_value(self.layout.closed_offset()),
            SheetPosition::Open | SheetPosition::Peek => self
                .driver
                .animate_spring(self.layout.offset_of(position), self.config.spring_friction),
        }
        self.settled = position;
    }

    /// Whether [`mount`](Self::mount) has run.
    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Position the sheet was last deliberately sent to.
    #[inline]
    #[must_use]
    pub fn settled(&self) -> SheetPosition {
        self.settled
    }

    /// Offset of the settled position.
    #[must_use]
    pub fn settled_offset(&self) -> f64 {
        self.layout.offset_of(self.settled)
    }

    /// Rendered offset, as reported by the driver.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.driver.value()
    }

    /// Layout constants.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Construction-time configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Gesture filter in use.
    #[inline]
    #[must_use]
    pub fn filter(&self) -> &GestureFilter {
        &self.filter
    }

    /// The animation driver.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the driver, e.g. to advance it by a frame.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the sheet, returning the driver.
    #[must_use]
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Whether a pointer drag is currently claimed.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_captured()
    }

    /// Whether a drag with cumulative `(dx, dy)` should be claimed.
    #[inline]
    #[must_use]
    pub fn should_capture(&self, dx: f64, dy: f64) -> bool {
        self.filter.should_capture(dx, dy)
    }

    /// Apply a drag sample with cumulative vertical delta `dy`.
    ///
    /// Returns `true` if the offset was written.
    pub fn handle_drag_move(&mut self, dy: f64) -> bool {
        let next = self.filter.move_offset(self.settled, &self.layout, dy);
        self.trace_drag(dy, next.is_some());
        match next {
            Some(offset) => {
                self.driver.set_value(offset);
                true
            }
            None => false,
        }
    }

    /// Settle a drag released with cumulative vertical delta `dy`.
    pub fn handle_drag_release(&mut self, dy: f64) -> SheetPosition {
        let destination = self.filter.release_destination(dy);
        self.trace_release(dy, destination);
        self.driver
            .animate_spring(self.layout.offset_of(destination), self.config.spring_friction);
        self.settled = destination;
        destination
    }

    /// Route a raw pointer sample.
    ///
    /// A touch-down is tracked only when it lands on a drag-enabled region
    /// of the current [`frame`](Self::frame). A touch-down during a captured
    /// drag settles that drag first, wherever it lands. Returns `true` when
    /// the sample started tracking or produced drag activity.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerKind::Down {
            let on_sheet = self.frame().hit_test(event.x, event.y).is_some();
            let superseded = self.tracker.process(event);
            let settled = self.apply_drag_events(superseded);
            self.pointer_active = on_sheet;
            if !on_sheet {
                self.tracker.reset();
            }
            return on_sheet || settled;
        }
        if !self.pointer_active {
            return false;
        }
        if matches!(event.kind, PointerKind::Up | PointerKind::Cancel) {
            self.pointer_active = false;
        }
        let events = self.tracker.process(event);
        self.apply_drag_events(events)
    }

    fn apply_drag_events(&mut self, events: Vec<DragEvent>) -> bool {
        let handled = !events.is_empty();
        for drag in events {
            match drag {
                DragEvent::Captured { .. } => {}
                DragEvent::Move { dy, .. } => {
                    self.handle_drag_move(dy);
                }
                // A revoked drag settles like a release so the sheet never
                // rests mid-drag.
                DragEvent::Release { dy, .. } | DragEvent::Cancel { dy, .. } => {
                    self.handle_drag_release(dy);
                }
            }
        }
        handled
    }

    /// Region geometry at the current rendered offset.
    #[must_use]
    pub fn frame(&self) -> SheetFrame {
        SheetFrame::compute(&self.layout, &self.config, self.driver.value())
    }

    /// Start a timing motion to `target` and record `settled`.
    pub(crate) fn transition(&mut self, operation: &'static str, target: f64, settled: SheetPosition) {
        self.trace_transition(operation, target, settled);
        self.driver.animate_timing(target, self.config.timing_duration());
        self.settled = settled;
    }

    #[cfg(feature = "tracing")]
    fn trace_mount(&self, position: SheetPosition) {
        let _span = tracing::debug_span!(
            "sheet.mount",
            index_start = self.config.index_start,
            settled = position.as_str(),
            animated = position != SheetPosition::Closed
        )
        .entered();
    }

    #[cfg(not(feature = "tracing"))]
    fn trace_mount(&self, _position: SheetPosition) {}

    #[cfg(feature = "tracing")]
    fn trace_transition(&self, operation: &'static str, target: f64, settled: SheetPosition) {
        let _span = tracing::debug_span!(
            "sheet.transition",
            operation,
            curve = Curve::Timing.as_str(),
            from = self.settled.as_str(),
            to = settled.as_str(),
            offset = self.driver.value(),
            target
        )
        .entered();
    }

    #[cfg(not(feature = "tracing"))]
    fn trace_transition(&self, _operation: &'static str, _target: f64, _settled: SheetPosition) {}

    #[cfg(feature = "tracing")]
    fn trace_drag(&self, dy: f64, applied: bool) {
        let _span = tracing::trace_span!(
            "sheet.drag",
            dy,
            settled = self.settled.as_str(),
            applied
        )
        .entered();
    }

    #[cfg(not(feature = "tracing"))]
    fn trace_drag(&self, _dy: f64, _applied: bool) {}

    #[cfg(feature = "tracing")]
    fn trace_release(&self, dy: f64, destination: SheetPosition) {
        let _span = tracing::debug_span!(
            "sheet.release",
            dy,
            curve = Curve::Spring.as_str(),
            from = self.settled.as_str(),
            destination = destination.as_str()
        )
        .entered();
    }

    #[cfg(not(feature = "tracing"))]
    fn trace_release(&self, _dy: f64, _destination: SheetPosition) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::animation::Curve;
    use std::time::Duration;

    const MS_16: Duration = Duration::from_millis(16);

    // 400x800: peek 240, sheet height ~347.8, closed 800.
    fn mounted(config: SheetConfig) -> BottomSheet {
        let mut sheet = BottomSheet::new(Viewport::new(400.0, 800.0), config, AnimatedValue::new(800.0));
        sheet.mount();
        sheet.driver_mut().settle(MS_16, 1000);
        sheet
    }

    #[test]
    fn new_sheet_is_unmounted_at_peek() {
        let sheet = BottomSheet::new(
            Viewport::new(400.0, 800.0),
            SheetConfig::default(),
            AnimatedValue::new(800.0),
        );
        assert!(!sheet.is_mounted());
        assert_eq!(sheet.settled(), SheetPosition::Peek);
        assert_eq!(sheet.offset(), 800.0);
        assert!(!sheet.driver().is_animating());
    }

    #[test]
    fn mount_is_idempotent() {
        let mut sheet = BottomSheet::new(
            Viewport::new(400.0, 800.0),
            SheetConfig::default(),
            AnimatedValue::new(800.0),
        );
        sheet.mount();
        sheet.mount();
        assert_eq!(sheet.driver().started().spring, 1);
    }

    #[test]
    fn pointer_drag_up_from_peek_opens() {
        let mut sheet = mounted(SheetConfig::default());
        assert_eq!(sheet.offset(), 240.0);

        assert!(sheet.handle_pointer(&PointerEvent::down(200.0, 750.0)));
        assert!(sheet.handle_pointer(&PointerEvent::moved(202.0, 700.0)));
        assert!(sheet.is_dragging());
        assert_eq!(sheet.offset(), 190.0);
        assert_eq!(sheet.settled(), SheetPosition::Peek, "moves never settle");

        assert!(sheet.handle_pointer(&PointerEvent::up(202.0, 650.0)));
        assert!(!sheet.is_dragging());
        assert_eq!(sheet.settled(), SheetPosition::Open);
        assert_eq!(sheet.driver().active_curve(), Some(Curve::Spring));
        assert_eq!(sheet.driver().target(), Some(0.0));
    }

    #[test]
    fn pointer_outside_sheet_is_ignored() {
        let mut sheet = mounted(SheetConfig::default());
        assert!(!sheet.handle_pointer(&PointerEvent::down(200.0, 100.0)));
        assert!(!sheet.handle_pointer(&PointerEvent::moved(200.0, 40.0)));
        assert!(!sheet.handle_pointer(&PointerEvent::up(200.0, 40.0)));
        assert_eq!(sheet.settled(), SheetPosition::Peek);
        assert_eq!(sheet.offset(), 240.0);
    }

    #[test]
    fn horizontal_swipe_is_declined() {
        let mut sheet = mounted(SheetConfig::default());
        assert!(sheet.handle_pointer(&PointerEvent::down(200.0, 750.0)));
        assert!(!sheet.handle_pointer(&PointerEvent::moved(230.0, 752.0)));
        assert!(!sheet.handle_pointer(&PointerEvent::moved(200.0, 700.0)));
        assert!(!sheet.handle_pointer(&PointerEvent::up(200.0, 700.0)));
        assert_eq!(sheet.offset(), 240.0);
        assert_eq!(sheet.driver().started().spring, 1, "only the mount spring");
    }

    #[test]
    fn disabled_body_ignores_drags() {
        let mut sheet = mounted(SheetConfig::default().with_disable_pan_down_children(true));
        assert!(!sheet.handle_pointer(&PointerEvent::down(200.0, 750.0)));
        assert!(!sheet.handle_pointer(&PointerEvent::moved(200.0, 700.0)));
        assert_eq!(sheet.offset(), 240.0);
    }

    #[test]
    fn cancel_settles_like_release() {
        let mut sheet = mounted(SheetConfig::default().with_index_start(1));
        assert_eq!(sheet.offset(), 0.0);

        assert!(sheet.handle_pointer(&PointerEvent::down(200.0, 600.0)));
        assert!(sheet.handle_pointer(&PointerEvent::moved(200.0, 680.0)));
        assert_eq!(sheet.offset(), 80.0);
        assert!(sheet.handle_pointer(&PointerEvent::cancel(0.0, 0.0)));
        assert_eq!(sheet.settled(), SheetPosition::Peek);
        assert_eq!(sheet.driver().target(), Some(240.0));
    }

    #[test]
    fn second_touch_on_sheet_settles_then_restarts() {
        let mut sheet = mounted(SheetConfig::default().with_index_start(1));
        sheet.handle_pointer(&PointerEvent::down(200.0, 600.0));
        sheet.handle_pointer(&PointerEvent::moved(200.0, 680.0));
        assert_eq!(sheet.offset(), 80.0);

        assert!(sheet.handle_pointer(&PointerEvent::down(200.0, 620.0)));
        assert!(!sheet.is_dragging());
        assert_eq!(sheet.settled(), SheetPosition::Peek);
        assert_eq!(sheet.driver().target(), Some(240.0));

        // Deltas now measure from the second touch-down.
        assert!(sheet.handle_pointer(&PointerEvent::moved(200.0, 560.0)));
        assert_eq!(sheet.offset(), 180.0);
    }

    #[test]
    fn handle_drag_with_pan_down_to_close() {
        let mut sheet = mounted(SheetConfig::default().with_pan_down_to_close(true).with_index_start(1));
        let frame = sheet.frame();
        let y = frame.handle.y + 10.0;
        assert!(sheet.handle_pointer(&PointerEvent::down(200.0, y)));
        assert!(sheet.handle_pointer(&PointerEvent::moved(200.0, y + 120.0)));
        assert!(sheet.handle_pointer(&PointerEvent::up(200.0, y + 150.0)));
        assert_eq!(sheet.settled(), SheetPosition::Closed);
        assert_eq!(sheet.driver().target(), Some(800.0));
    }

    #[test]
    fn frame_follows_rendered_offset() {
        let sheet = mounted(SheetConfig::default());
        let frame = sheet.frame();
        assert_eq!(frame.offset, 240.0);
        assert!((frame.content.y - (800.0 - 800.0 / 2.3 + 240.0)).abs() < 1e-9);
    }
}
