#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) over absolute positions.
//!
//! Based on the classical damped spring equation (unit mass):
//!
//!   a = -stiffness × (position - target) - damping × velocity
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force. Higher = faster response.
//! - **damping** (c): velocity drag. Below `2√k` the spring overshoots the
//!   target before settling; at or above it there is no overshoot.
//! - Hosts that think in tension/friction pairs use
//!   [`SpringConfig::from_origami`], which maps them onto `k` and `c`.
//!
//! # Integration
//!
//! Semi-implicit Euler with 4ms sub-steps, so large frame deltas stay stable.
//!
//! # Invariants
//!
//! 1. `position()` is unclamped and in the caller's units (device pixels).
//! 2. A spring at rest stays at rest; only a starting velocity wakes it.
//! 3. On coming to rest (including at construction) the position snaps
//!    exactly to the target.
//! 4. Stiffness and damping are always positive.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta (pixels) below which the spring may come to rest.
const DEFAULT_REST_THRESHOLD: f64 = 0.01;

/// Velocity (pixels/sec) below which the spring may come to rest.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.01;

const MIN_STIFFNESS: f64 = 0.1;
const MIN_DAMPING: f64 = 0.1;

/// Tension used when only a friction constant is supplied.
pub const DEFAULT_TENSION: f64 = 40.0;

/// Stiffness/damping pair for a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Restoring force strength.
    pub stiffness: f64,
    /// Velocity drag.
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
        }
    }
}

impl SpringConfig {
    /// Create a config, clamping both parameters to small positive minimums.
    #[must_use]
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness: clamp_param(stiffness, MIN_STIFFNESS),
            damping: clamp_param(damping, MIN_DAMPING),
        }
    }

    /// Convert an Origami-style tension/friction pair.
    ///
    /// `stiffness = (tension - 30) * 3.62 + 194`,
    /// `damping = (friction - 8) * 3 + 25`.
    #[must_use]
    pub fn from_origami(tension: f64, friction: f64) -> Self {
        Self::new((tension - 30.0) * 3.62 + 194.0, (friction - 8.0) * 3.0 + 25.0)
    }

    /// Origami conversion with [`DEFAULT_TENSION`].
    #[must_use]
    pub fn from_friction(friction: f64) -> Self {
        Self::from_origami(DEFAULT_TENSION, friction)
    }

    /// Critical damping coefficient for this stiffness.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * self.stiffness.sqrt()
    }
}

fn clamp_param(v: f64, min: f64) -> f64 {
    if v.is_finite() { v.max(min) } else { min }
}

/// A damped harmonic oscillator moving a position toward a target.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    config: SpringConfig,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring starting at `initial` and targeting `target`.
    ///
    /// A spring starting within the rest threshold of its target begins at
    /// rest, already snapped onto the target.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        let at_rest = (initial - target).abs() < DEFAULT_REST_THRESHOLD;
        Self {
            position: if at_rest { target } else { initial },
            velocity: 0.0,
            target,
            initial,
            config: SpringConfig::default(),
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest,
        }
    }

    /// Set stiffness and damping (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SpringConfig) -> Self {
        self.config = SpringConfig::new(config.stiffness, config.damping);
        self
    }

    /// Set the starting velocity (builder pattern). Wakes the spring.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        if velocity.is_finite() && velocity != 0.0 {
            self.velocity = velocity;
            self.at_rest = false;
        }
        self
    }

    /// Current position (unclamped).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Active stiffness/damping.
    #[inline]
    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Whether the spring has settled at the target.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration =
            -self.config.stiffness * displacement - self.config.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        let pos_delta = (self.position - self.target).abs();
        if pos_delta < self.rest_threshold && self.velocity.abs() < self.velocity_threshold {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    /// Fraction of the distance from the initial position to the target,
    /// clamped to `[0.0, 1.0]`.
    fn value(&self) -> f32 {
        let span = self.target - self.initial;
        if span.abs() < f64::EPSILON {
            return 1.0;
        }
        (((self.position - self.initial) / span) as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn simulate(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(MS_16);
        }
    }

    #[test]
    fn spring_reaches_pixel_target() {
        let mut spring = Spring::new(844.0, 253.2).with_config(SpringConfig::from_friction(6.0));
        simulate(&mut spring, 300);
        assert_eq!(spring.position(), 253.2);
        assert!(spring.is_complete());
    }

    #[test]
    fn origami_conversion() {
        let cfg = SpringConfig::from_origami(40.0, 6.0);
        assert!((cfg.stiffness - 230.2).abs() < 1e-9);
        assert!((cfg.damping - 19.0).abs() < 1e-9);
        assert!(cfg.damping < cfg.critical_damping(), "friction 6 is underdamped");
    }

    #[test]
    fn degenerate_parameters_are_clamped() {
        let cfg = SpringConfig::from_origami(-500.0, -500.0);
        assert_eq!(cfg.stiffness, MIN_STIFFNESS);
        assert_eq!(cfg.damping, MIN_DAMPING);
        let cfg = SpringConfig::new(f64::NAN, f64::INFINITY);
        assert_eq!(cfg.stiffness, MIN_STIFFNESS);
        assert_eq!(cfg.damping, MIN_DAMPING);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut spring = Spring::new(0.0, 100.0).with_config(SpringConfig::from_friction(6.0));
        let mut max_pos = 0.0_f64;
        for _ in 0..200 {
            spring.tick(MS_16);
            max_pos = max_pos.max(spring.position());
        }
        assert!(max_pos > 100.0, "expected overshoot, max {max_pos}");
    }

    #[test]
    fn spring_already_at_target_is_at_rest() {
        let spring = Spring::new(10.0, 10.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn velocity_wakes_resting_spring() {
        let mut spring = Spring::new(0.0, 0.0).with_velocity(500.0);
        assert!(!spring.is_at_rest());
        spring.tick(MS_16);
        assert!(spring.position() > 0.0);
    }

    #[test]
    fn spring_within_rest_threshold_starts_on_target() {
        let spring = Spring::new(0.005, 0.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 0.0);

        let spring = Spring::new(240.004, 240.0);
        assert_eq!(spring.position(), 240.0);
    }

    #[test]
    fn large_dt_is_stable() {
        let mut spring = Spring::new(0.0, 500.0).with_config(SpringConfig::new(400.0, 40.0));
        spring.tick(Duration::from_secs(3));
        assert!(spring.position().is_finite());
        assert!((spring.position() - 500.0).abs() < 1.0);
    }
}
