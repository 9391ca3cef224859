#![forbid(unsafe_code)]

//! Motion primitives.
//!
//! - [`Timing`]: duration-based tween shaped by an easing function.
//! - [`Spring`]: damped harmonic oscillator.
//! - [`AnimatedValue`]: one scalar with at most one active motion.
//!
//! Everything here is driven by explicit `tick(dt)` calls; no module reads
//! a clock, so behaviour is deterministic under test.

pub mod spring;
pub mod timing;
pub mod value;

pub use spring::{Spring, SpringConfig};
pub use timing::Timing;
pub use value::{AnimatedValue, AnimationCounts, Curve};

use std::time::Duration;

/// A time-driven animation.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Normalized progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;
}

/// Easing function: maps linear progress `t ∈ [0, 1]` to shaped progress.
pub type EasingFn = fn(f32) -> f32;

/// No easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Cubic-bezier ease-in (0.42, 0, 1, 1).
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 1.0, 1.0, t)
}

/// Cubic-bezier ease-out (0, 0, 0.58, 1).
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    cubic_bezier(0.0, 0.0, 0.58, 1.0, t)
}

/// Cubic-bezier ease-in-out (0.42, 0, 0.58, 1). Default timing curve.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, t)
}

/// Evaluate a unit cubic bezier with control points `(x1, y1)`, `(x2, y2)`
/// at horizontal position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction.is_nan() || fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let derivative = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson first; fall back to bisection when the slope vanishes.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            solved = true;
            break;
        }
        let d = derivative(ax, bx, cx, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - x / d).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = fraction;
        for _ in 0..24 {
            let x = sample(ax, bx, cx, t);
            if (x - fraction).abs() < 1e-6 {
                break;
            }
            if x > fraction {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}
