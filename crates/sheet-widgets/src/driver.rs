#![forbid(unsafe_code)]

//! Animation driver seam.
//!
//! The sheet never interpolates anything itself. It writes the offset
//! through an [`AnimationDriver`]: directly while a finger is dragging, or by
//! requesting a timing/spring motion toward a resting position. Every
//! request must supersede whatever motion was already in flight on the
//! same value.

use std::time::Duration;

use sheet_core::animation::{AnimatedValue, SpringConfig, ease_in_out};

/// The animated scalar behind a sheet's vertical offset.
pub trait AnimationDriver {
    /// Current (rendered) value.
    fn value(&self) -> f64;

    /// Snap to `value`, cancelling any motion in flight.
    fn set_value(&mut self, value: f64);

    /// Eased, duration-based motion toward `target`. Used for imperative
    /// transitions.
    fn animate_timing(&mut self, target: f64, duration: Duration);

    /// Physical settle toward `target`. Used for drag releases and mount-in.
    fn animate_spring(&mut self, target: f64, friction: f64);
}

impl AnimationDriver for AnimatedValue {
    fn value(&self) -> f64 {
        AnimatedValue::value(self)
    }

    fn set_value(&mut self, value: f64) {
        AnimatedValue::set_value(self, value);
    }

    fn animate_timing(&mut self, target: f64, duration: Duration) {
        self.start_timing(target, duration, ease_in_out);
    }

    fn animate_spring(&mut self, target: f64, friction: f64) {
        self.start_spring(target, SpringConfig::from_friction(friction));
    }
}

impl<D: AnimationDriver + ?Sized> AnimationDriver for &mut D {
    fn value(&self) -> f64 {
        (**self).value()
    }

    fn set_value(&mut self, value: f64) {
        (**self).set_value(value);
    }

    fn animate_timing(&mut self, target: f64, duration: Duration) {
        (**self).animate_timing(target, duration);
    }

    fn animate_spring(&mut self, target: f64, friction: f64) {
        (**self).animate_spring(target, friction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::animation::Curve;

    #[test]
    fn animated_value_routes_curves() {
        let mut v = AnimatedValue::new(800.0);
        AnimationDriver::animate_spring(&mut v, 240.0, 6.0);
        assert_eq!(v.active_curve(), Some(Curve::Spring));
        AnimationDriver::animate_timing(&mut v, 0.0, Duration::from_millis(500));
        assert_eq!(v.active_curve(), Some(Curve::Timing));
        assert_eq!(v.target(), Some(0.0));
    }

    fn snap<D: AnimationDriver>(mut driver: D, value: f64) -> f64 {
        driver.set_value(value);
        driver.value()
    }

    #[test]
    fn borrowed_driver_forwards() {
        let mut v = AnimatedValue::new(0.0);
        assert_eq!(snap(&mut v, 12.0), 12.0);
        assert_eq!(v.value(), 12.0);
    }
}
