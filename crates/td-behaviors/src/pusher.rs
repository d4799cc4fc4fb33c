//! Binary-position pusher behavior.

use td_core::{is_unit_range, Real};
use td_hal::Actuator;

use crate::error::{BehaviorError, BehaviorResult};

/// A servo with exactly two commanded positions, extended and retracted.
///
/// No ramping and no intermediate positions: the pusher either blocks the
/// ball or shoves it into the flywheels.
pub struct Pusher {
    servo: Box<dyn Actuator>,
    retracted_val: Real,
    extended_val: Real,
}

impl core::fmt::Debug for Pusher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pusher")
            .field("retracted_val", &self.retracted_val)
            .field("extended_val", &self.extended_val)
            .finish_non_exhaustive()
    }
}

impl Pusher {
    /// Create a pusher and retract it.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidConfig`] if either position is
    /// outside the servo's `[0, 1]` range.
    pub fn new(
        servo: impl Actuator + 'static,
        retracted_val: Real,
        extended_val: Real,
    ) -> BehaviorResult<Self> {
        if !is_unit_range(retracted_val) {
            return Err(BehaviorError::InvalidConfig {
                what: "retracted_val",
                value: retracted_val,
            });
        }
        if !is_unit_range(extended_val) {
            return Err(BehaviorError::InvalidConfig {
                what: "extended_val",
                value: extended_val,
            });
        }
        let mut pusher = Self {
            servo: Box::new(servo),
            retracted_val,
            extended_val,
        };
        pusher.retract();
        Ok(pusher)
    }

    pub fn retracted_val(&self) -> Real {
        self.retracted_val
    }

    pub fn extended_val(&self) -> Real {
        self.extended_val
    }

    /// Drive the servo to its extended position.
    pub fn extend(&mut self) {
        self.servo.set(self.extended_val);
    }

    /// Drive the servo to its retracted position.
    pub fn retract(&mut self) {
        self.servo.set(self.retracted_val);
    }
}
