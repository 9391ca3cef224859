#![forbid(unsafe_code)]

//! Gesture filter: capture decision, drag clamping, and release targets.
//!
//! Pure functions over the settled position and the cumulative vertical
//! delta `dy` of the current drag. Every function is total: any `dx`, `dy`
//! (including NaN and infinities) yields a defined answer.
//!
//! # Move rules, in order
//!
//! 1. settled at open and `dy < 0` → ignored (already fully open).
//! 2. settled at peek and `dy > 0` → ignored.
//! 3. `dy + peek_offset <= 0` → ignored (would pass the open position).
//! 4. `dy < 0` → offset = `dy + peek_offset`.
//! 5. otherwise → offset = `dy`, clamped to the closed offset.
//!
//! # Release rule
//!
//! Direction only, no velocity: upward → open; otherwise closed when pan
//! down to close is enabled, else peek.

use sheet_core::gesture::CaptureThreshold;

use crate::layout::SheetLayout;
use crate::position::SheetPosition;

/// Decides how drag input maps onto the sheet offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureFilter {
    threshold: CaptureThreshold,
    pan_down_to_close: bool,
}

impl GestureFilter {
    /// Create a filter with the default capture threshold.
    #[must_use]
    pub fn new(pan_down_to_close: bool) -> Self {
        Self {
            threshold: CaptureThreshold::default(),
            pan_down_to_close,
        }
    }

    /// Replace the capture threshold (builder pattern).
    #[must_use]
    pub fn with_threshold(mut self, threshold: CaptureThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Capture threshold in use.
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> CaptureThreshold {
        self.threshold
    }

    /// Whether downward releases close the sheet.
    #[inline]
    #[must_use]
    pub fn pan_down_to_close(&self) -> bool {
        self.pan_down_to_close
    }

    /// Whether a drag with cumulative `(dx, dy)` should be claimed.
    #[inline]
    #[must_use]
    pub fn should_capture(&self, dx: f64, dy: f64) -> bool {
        self.threshold.should_capture(dx, dy)
    }

    /// Offset to display for a drag sample, or `None` if the sample is
    /// ignored.
    #[must_use]
    pub fn move_offset(&self, settled: SheetPosition, layout: &SheetLayout, dy: f64) -> Option<f64> {
        if !dy.is_finite() {
            return None;
        }
        if settled == SheetPosition::Open && dy < 0.0 {
            return None;
        }
        if settled == SheetPosition::Peek && dy > 0.0 {
            return None;
        }
        let peek = layout.peek_offset();
        if dy + peek <= 0.0 {
            return None;
        }
        if dy < 0.0 {
            return Some(dy + peek);
        }
        Some(dy.min(layout.closed_offset()))
    }

    /// Position a drag released with cumulative `dy` settles at.
    #[must_use]
    pub fn release_destination(&self, dy: f64) -> SheetPosition {
        if dy < 0.0 {
            SheetPosition::Open
        } else if self.pan_down_to_close {
            SheetPosition::Closed
        } else {
            SheetPosition::Peek
        }
    }
}

impl Default for GestureFilter {
    fn default() -> Self {
        Self::new(false)
    }
}
