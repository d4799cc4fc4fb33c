//! Bounded, rate-limited scalar values.
//!
//! A [`Ramp`] carries the commanded value for one actuator channel and
//! moves it toward a target by at most a fixed step per tick. It bounds
//! the velocity of the *commanded* value, not true physical dynamics;
//! the point is to never hand a step-function command to a mechanism that
//! would be mechanically shocked by one.

use serde::{Deserialize, Serialize};
use td_core::Real;

use crate::error::{ControlError, ControlResult};

/// A bounded scalar that approaches its target at a capped per-tick rate.
///
/// # Example
///
/// ```
/// use td_control::Ramp;
///
/// let mut ramp = Ramp::new(-1.0, 1.0, 0.1).unwrap();
/// ramp.set_target(1.0);
/// for _ in 0..10 {
///     ramp.step();
/// }
/// assert_eq!(ramp.current(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    /// Lower bound for both current and target.
    min: Real,
    /// Upper bound for both current and target.
    max: Real,
    /// Value commanded right now.
    current: Real,
    /// Value the ramp is approaching.
    target: Real,
    /// Maximum change in `current` per step.
    max_step: Real,
}

impl Ramp {
    /// Create a ramp over `[min, max]` stepping by at most `max_step` per
    /// tick. The current value starts at the midpoint of the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidArg`] if the bounds are not finite
    /// and ordered, or if `max_step` is negative or non-finite.
    pub fn new(min: Real, max: Real, max_step: Real) -> ControlResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ControlError::InvalidArg {
                what: "ramp bounds must be finite with min < max",
            });
        }
        if !max_step.is_finite() || max_step < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "max_step must be finite and non-negative",
            });
        }
        let midpoint = (min + max) / 2.0;
        Ok(Self {
            min,
            max,
            current: midpoint,
            target: midpoint,
            max_step,
        })
    }

    /// Value commanded right now.
    pub fn current(&self) -> Real {
        self.current
    }

    /// Value the ramp is approaching.
    pub fn target(&self) -> Real {
        self.target
    }

    /// Maximum change in the current value per step.
    pub fn max_step(&self) -> Real {
        self.max_step
    }

    /// Retune the per-tick step cap. Negative values are clamped to zero.
    pub fn set_max_step(&mut self, max_step: Real) {
        self.max_step = max_step.max(0.0);
    }

    /// Set the value the ramp will approach, clamped into `[min, max]`.
    ///
    /// Always succeeds; out-of-range targets are never stored.
    pub fn set_target(&mut self, target: Real) {
        self.target = target.clamp(self.min, self.max);
    }

    /// Advance the current value one step toward the target.
    ///
    /// Snaps exactly onto the target once the remaining distance is within
    /// one step, so the value never overshoots or oscillates around it.
    pub fn step(&mut self) {
        let remaining = self.target - self.current;
        if remaining.abs() <= self.max_step {
            self.current = self.target;
        } else {
            self.current += self.max_step * remaining.signum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_midpoint() {
        let ramp = Ramp::new(-1.0, 1.0, 0.1).unwrap();
        assert_eq!(ramp.current(), 0.0);
        assert_eq!(ramp.target(), 0.0);

        let offset = Ramp::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(offset.current(), 0.5);
    }

    #[test]
    fn target_is_clamped_on_write() {
        let mut ramp = Ramp::new(-1.0, 1.0, 0.1).unwrap();
        ramp.set_target(2.5);
        assert_eq!(ramp.target(), 1.0);
        ramp.set_target(-3.0);
        assert_eq!(ramp.target(), -1.0);
        ramp.set_target(0.4);
        assert_eq!(ramp.target(), 0.4);
    }

    #[test]
    fn reaches_full_scale_in_ten_steps() {
        // The canonical scenario: (-1, 1, 0.1), target 1.0 from 0.0.
        let mut ramp = Ramp::new(-1.0, 1.0, 0.1).unwrap();
        ramp.set_target(1.0);
        for _ in 0..10 {
            ramp.step();
        }
        assert_eq!(ramp.current(), 1.0);
    }

    #[test]
    fn snaps_on_final_partial_step() {
        let mut ramp = Ramp::new(-1.0, 1.0, 0.3).unwrap();
        ramp.set_target(0.5);
        ramp.step();
        assert!((ramp.current() - 0.3).abs() < 1e-12);
        ramp.step();
        assert_eq!(ramp.current(), 0.5);
        // Further steps hold steady.
        ramp.step();
        assert_eq!(ramp.current(), 0.5);
    }

    #[test]
    fn steps_downward_too() {
        let mut ramp = Ramp::new(-1.0, 1.0, 0.25).unwrap();
        ramp.set_target(-1.0);
        ramp.step();
        assert!((ramp.current() + 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_step_freezes_current() {
        let mut ramp = Ramp::new(-1.0, 1.0, 0.0).unwrap();
        ramp.set_target(1.0);
        ramp.step();
        assert_eq!(ramp.current(), 0.0);
    }

    #[test]
    fn retuning_step_applies_next_tick() {
        let mut ramp = Ramp::new(-1.0, 1.0, 0.1).unwrap();
        ramp.set_target(1.0);
        ramp.step();
        ramp.set_max_step(0.5);
        ramp.step();
        assert!((ramp.current() - 0.6).abs() < 1e-12);
        ramp.set_max_step(-1.0);
        assert_eq!(ramp.max_step(), 0.0);
    }

    #[test]
    fn invalid_parameters() {
        assert!(Ramp::new(1.0, -1.0, 0.1).is_err());
        assert!(Ramp::new(0.0, 0.0, 0.1).is_err());
        assert!(Ramp::new(-1.0, 1.0, -0.1).is_err());
        assert!(Ramp::new(f64::NAN, 1.0, 0.1).is_err());
        assert!(Ramp::new(-1.0, 1.0, f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn target_always_within_bounds(target in -10.0_f64..10.0) {
            let mut ramp = Ramp::new(-1.0, 1.0, 0.1).unwrap();
            ramp.set_target(target);
            prop_assert!(ramp.target() >= -1.0);
            prop_assert!(ramp.target() <= 1.0);
            prop_assert_eq!(ramp.target(), target.clamp(-1.0, 1.0));
        }

        #[test]
        fn converges_without_overshoot(
            target in -1.0_f64..1.0,
            max_step in 0.01_f64..0.5,
        ) {
            let mut ramp = Ramp::new(-1.0, 1.0, max_step).unwrap();
            ramp.set_target(target);

            let start = ramp.current();
            let bound = ((target - start).abs() / max_step).ceil() as usize;
            let start_side = (target - start).signum();

            for _ in 0..bound {
                ramp.step();
                // Never passes the target.
                prop_assert!((target - ramp.current()) * start_side >= -1e-12);
            }
            prop_assert!((ramp.current() - target).abs() < 1e-9);
        }
    }
}
