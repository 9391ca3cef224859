#![forbid(unsafe_code)]

//! A single animated scalar with supersession semantics.
//!
//! [`AnimatedValue`] holds the current value and at most one active motion.
//! Starting a motion while another is in flight replaces it: the new motion
//! starts from the value the old one had reached, so two motions can never
//! write divergent values into the same scalar.
//!
//! # Invariants
//!
//! 1. At most one motion is active.
//! 2. `set_value()` cancels the active motion.
//! 3. Once a motion completes, `value()` equals its target exactly and the
//!    motion is dropped.
//! 4. A spring that supersedes a spring inherits its velocity.

use std::time::Duration;

use super::{Animation, EasingFn, Spring, SpringConfig, Timing};

/// Interpolation curve of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Duration-based, eased.
    Timing,
    /// Physics-based settle.
    Spring,
}

impl Curve {
    /// Stable lowercase name, used in logs and traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timing => "timing",
            Self::Spring => "spring",
        }
    }
}

/// Number of motions started on a value, per curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationCounts {
    /// Timing motions started.
    pub timing: u32,
    /// Spring motions started.
    pub spring: u32,
}

impl AnimationCounts {
    /// Total motions started.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.timing + self.spring
    }
}

#[derive(Debug, Clone)]
enum Motion {
    Timing(Timing),
    Spring(Spring),
}

impl Motion {
    fn curve(&self) -> Curve {
        match self {
            Self::Timing(_) => Curve::Timing,
            Self::Spring(_) => Curve::Spring,
        }
    }

    fn target(&self) -> f64 {
        match self {
            Self::Timing(t) => t.target(),
            Self::Spring(s) => s.target(),
        }
    }
}

/// An animated scalar.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    motion: Option<Motion>,
    started: AnimationCounts,
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl AnimatedValue {
    /// Create a value resting at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            motion: None,
            started: AnimationCounts::default(),
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Target of the active motion, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.motion.as_ref().map(Motion::target)
    }

    /// Curve of the active motion, if any.
    #[must_use]
    pub fn active_curve(&self) -> Option<Curve> {
        self.motion.as_ref().map(Motion::curve)
    }

    /// Whether a motion is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Motions started so far.
    #[inline]
    #[must_use]
    pub fn started(&self) -> AnimationCounts {
        self.started
    }

    /// Snap to `value`, cancelling any active motion.
    pub fn set_value(&mut self, value: f64) {
        self.motion = None;
        self.value = value;
    }

    /// Start a timing motion toward `target`, superseding any active motion.
    pub fn start_timing(&mut self, target: f64, duration: Duration, easing: EasingFn) {
        self.log_supersede(Curve::Timing, target);
        let timing = Timing::new(self.value, target, duration).easing(easing);
        self.motion = Some(Motion::Timing(timing));
        self.started.timing += 1;
    }

    /// Start a spring motion toward `target`, superseding any active motion.
    pub fn start_spring(&mut self, target: f64, config: SpringConfig) {
        self.log_supersede(Curve::Spring, target);
        let velocity = match &self.motion {
            Some(Motion::Spring(s)) => s.velocity(),
            _ => 0.0,
        };
        let spring = Spring::new(self.value, target)
            .with_config(config)
            .with_velocity(velocity);
        self.motion = Some(Motion::Spring(spring));
        self.started.spring += 1;
    }

    /// Advance the active motion by `dt`.
    ///
    /// Returns `true` if the value changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };

        let before = self.value;
        let complete = match motion {
            Motion::Timing(t) => {
                t.tick(dt);
                self.value = t.position();
                t.is_complete()
            }
            Motion::Spring(s) => {
                s.tick(dt);
                self.value = s.position();
                s.is_complete()
            }
        };
        if complete {
            self.value = motion.target();
            self.motion = None;
        }

        // Compare bit patterns so NaN never reads as "changed" forever.
        before.to_bits() != self.value.to_bits()
    }

    /// Run the active motion to completion in steps of `frame`, returning
    /// the number of frames taken. Stops after `max_frames`.
    pub fn settle(&mut self, frame: Duration, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.is_animating() && frames < max_frames {
            self.tick(frame);
            frames += 1;
        }
        frames
    }

    #[cfg(feature = "tracing")]
    fn log_supersede(&self, curve: Curve, target: f64) {
        if let Some(previous) = &self.motion {
            tracing::debug!(
                previous_curve = previous.curve().as_str(),
                previous_target = previous.target(),
                curve = curve.as_str(),
                target,
                value = self.value,
                "animated_value.supersede"
            );
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn log_supersede(&self, _curve: Curve, _target: f64) {}
}
