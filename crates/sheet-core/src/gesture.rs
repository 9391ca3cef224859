#![forbid(unsafe_code)]

//! Drag capture: transforms raw pointer samples into cumulative drag deltas.
//!
//! [`DragTracker`] is a stateful processor that follows one touch sequence
//! at a time and decides whether this surface claims it. Until the gesture
//! is claimed, each move is checked against a [`CaptureThreshold`]; after
//! it is claimed, every move is reported as a cumulative `(dx, dy)` since
//! touch-down.
//!
//! # State Machine
//!
//! ```text
//! Idle --Down--> Pending --Move (threshold met)--> Captured --Up/Cancel--> Idle
//!                   |                                  |
//!                   |                                  +--Down--> Pending (emits Cancel)
//!                   +--Move (cross axis exceeded)--> Declined --Up/Cancel--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. `Move`, `Release` and `Cancel` are only emitted for a captured gesture.
//! 2. The move that claims the gesture emits `Captured` followed by `Move`.
//! 3. A declined gesture never becomes captured before the next `Down`.
//! 4. A `Down` during a captured gesture emits `Cancel` for it first.
//! 5. After `reset()`, the tracker is idle.
//!
//! # Failure Modes
//!
//! - Samples without a prior `Down` are ignored.
//! - NaN coordinates produce NaN deltas, which neither satisfy the capture
//!   predicate nor decline the gesture.

use crate::event::{PointerEvent, PointerKind};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Directional slop that decides whether a vertical drag is claimed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureThreshold {
    /// Largest horizontal travel still considered a vertical drag (default: 10).
    pub max_cross_axis: f64,
    /// Vertical travel that must be exceeded to claim the drag (default: 5).
    pub min_main_axis: f64,
}

impl Default for CaptureThreshold {
    fn default() -> Self {
        Self {
            max_cross_axis: 10.0,
            min_main_axis: 5.0,
        }
    }
}

impl CaptureThreshold {
    /// Whether a drag with cumulative `(dx, dy)` should be claimed.
    ///
    /// Claims only when `|dx| <= max_cross_axis` and `|dy| > min_main_axis`.
    #[inline]
    #[must_use]
    pub fn should_capture(&self, dx: f64, dy: f64) -> bool {
        dx.abs() <= self.max_cross_axis && dy.abs() > self.min_main_axis
    }

    /// Whether horizontal travel already rules this gesture out.
    #[inline]
    #[must_use]
    pub fn exceeds_cross_axis(&self, dx: f64) -> bool {
        dx.abs() > self.max_cross_axis
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Events produced by [`DragTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// This surface claimed the touch sequence.
    Captured { dx: f64, dy: f64 },
    /// Cumulative movement since touch-down.
    Move { dx: f64, dy: f64 },
    /// Finger lifted after a captured drag.
    Release { dx: f64, dy: f64 },
    /// The platform revoked a captured drag; deltas are from the last sample.
    Cancel { dx: f64, dy: f64 },
}

// ---------------------------------------------------------------------------
// DragTracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pending,
    Captured,
    Declined,
}

/// Stateful capture primitive for one touch sequence at a time.
#[derive(Debug, Clone)]
pub struct DragTracker {
    threshold: CaptureThreshold,
    phase: Phase,
    origin: (f64, f64),
    last_delta: (f64, f64),
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(CaptureThreshold::default())
    }
}

impl DragTracker {
    /// Create a tracker with the given capture threshold.
    #[must_use]
    pub fn new(threshold: CaptureThreshold) -> Self {
        Self {
            threshold,
            phase: Phase::Idle,
            origin: (0.0, 0.0),
            last_delta: (0.0, 0.0),
        }
    }

    /// Process a pointer sample, returning any drag events produced.
    pub fn process(&mut self, event: &PointerEvent) -> Vec<DragEvent> {
        let mut out = Vec::with_capacity(2);

        match event.kind {
            PointerKind::Down => {
                if self.phase == Phase::Captured {
                    let (dx, dy) = self.last_delta;
                    out.push(DragEvent::Cancel { dx, dy });
                }
                self.phase = Phase::Pending;
                self.origin = (event.x, event.y);
                self.last_delta = (0.0, 0.0);
            }
            PointerKind::Move => {
                let (dx, dy) = self.delta_to(event);
                match self.phase {
                    Phase::Pending => {
                        if self.threshold.should_capture(dx, dy) {
                            self.phase = Phase::Captured;
                            self.last_delta = (dx, dy);
                            out.push(DragEvent::Captured { dx, dy });
                            out.push(DragEvent::Move { dx, dy });
                        } else if self.threshold.exceeds_cross_axis(dx) {
                            self.phase = Phase::Declined;
                        }
                    }
                    Phase::Captured => {
                        self.last_delta = (dx, dy);
                        out.push(DragEvent::Move { dx, dy });
                    }
                    Phase::Idle | Phase::Declined => {}
                }
            }
            PointerKind::Up => {
                if self.phase == Phase::Captured {
                    let (dx, dy) = self.delta_to(event);
                    out.push(DragEvent::Release { dx, dy });
                }
                self.phase = Phase::Idle;
            }
            PointerKind::Cancel => {
                if self.phase == Phase::Captured {
                    let (dx, dy) = self.last_delta;
                    out.push(DragEvent::Cancel { dx, dy });
                }
                self.phase = Phase::Idle;
            }
        }

        out
    }

    /// Whether a drag is currently claimed.
    #[inline]
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.phase == Phase::Captured
    }

    /// Reset to idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.origin = (0.0, 0.0);
        self.last_delta = (0.0, 0.0);
    }

    /// Get a reference to the capture threshold.
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> &CaptureThreshold {
        &self.threshold
    }

    fn delta_to(&self, event: &PointerEvent) -> (f64, f64) {
        (event.x - self.origin.0, event.y - self.origin.1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
