#![forbid(unsafe_code)]

//! Timing: duration-based interpolation between two positions.
//!
//! # Invariants
//!
//! 1. `position()` equals `from` before the first tick and exactly `to`
//!    once complete.
//! 2. `value()` is the eased progress in `[0.0, 1.0]`.
//! 3. Elapsed time never exceeds the duration.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns, so the first non-zero tick completes.

use std::time::Duration;

use super::{Animation, EasingFn, ease_in_out};

/// Default duration for imperative transitions.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// A tween from `from` to `to` over a fixed duration.
#[derive(Debug, Clone)]
pub struct Timing {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Timing {
    /// Create a tween using the default ease-in-out curve.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            elapsed: Duration::ZERO,
            easing: ease_in_out,
        }
    }

    /// Set the easing function (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start position.
    #[inline]
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Target position.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = f64::from((self.easing)(self.progress()));
        self.from + (self.to - self.from) * eased
    }
}

impl Animation for Timing {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }
}
