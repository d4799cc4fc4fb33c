//! Limit-bounded winch behavior.

use td_control::{HardStop, Periodic, Ramp, Stop};
use td_core::{Real, TickRate};
use td_hal::{Actuator, LimitSwitch};

use crate::config::WinchConfig;
use crate::error::{BehaviorError, BehaviorResult};

/// A single ramped motor whose travel is bounded by two limit switches.
///
/// Raising into a pressed upper switch (or lowering into a pressed lower
/// switch) does not merely decelerate: the ramp is bypassed and the motor
/// is zeroed on the same tick. A ramped stop would keep the winch moving
/// past the physical stop while the ramp wound down.
pub struct Winch {
    ramp: Ramp,
    motor: Box<dyn Actuator>,
    lower_limit: Box<dyn LimitSwitch>,
    upper_limit: Box<dyn LimitSwitch>,
    nominal_speed: Real,
}

impl core::fmt::Debug for Winch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Winch")
            .field("ramp", &self.ramp)
            .field("nominal_speed", &self.nominal_speed)
            .finish_non_exhaustive()
    }
}

impl Winch {
    /// Create a winch.
    ///
    /// `nominal_speed` is the commanded speed at multiplier 1; `max_step`
    /// caps the per-tick change of the commanded value.
    ///
    /// # Errors
    ///
    /// Returns an error if `nominal_speed` is outside `[0, 1]` or the ramp
    /// parameters are invalid.
    pub fn new(
        motor: impl Actuator + 'static,
        lower_limit: impl LimitSwitch + 'static,
        upper_limit: impl LimitSwitch + 'static,
        nominal_speed: Real,
        max_step: Real,
    ) -> BehaviorResult<Self> {
        if !td_core::is_unit_range(nominal_speed) {
            return Err(BehaviorError::InvalidConfig {
                what: "nominal_speed",
                value: nominal_speed,
            });
        }
        Ok(Self {
            ramp: Ramp::new(-1.0, 1.0, max_step)?,
            motor: Box::new(motor),
            lower_limit: Box::new(lower_limit),
            upper_limit: Box::new(upper_limit),
            nominal_speed,
        })
    }

    /// Create a winch from per-second tuning.
    pub fn from_config(
        motor: impl Actuator + 'static,
        lower_limit: impl LimitSwitch + 'static,
        upper_limit: impl LimitSwitch + 'static,
        cfg: &WinchConfig,
        rate: TickRate,
    ) -> BehaviorResult<Self> {
        Self::new(
            motor,
            lower_limit,
            upper_limit,
            cfg.nominal_speed,
            rate.per_tick(cfg.max_accel_per_sec),
        )
    }

    /// Lower at `nominal_speed * multiplier`.
    ///
    /// Winches often need different raising and lowering speeds; the
    /// multiplier scales the nominal speed per direction. If the lower
    /// limit switch is pressed this becomes an immediate, unramped stop.
    pub fn lower(&mut self, multiplier: Real) {
        if self.lower_limit.is_pressed() {
            self.immediate_stop();
        } else {
            self.ramp.set_target(-self.nominal_speed * multiplier);
            self.apply();
        }
    }

    /// Lower at the nominal speed.
    pub fn lower_full(&mut self) {
        self.lower(1.0);
    }

    /// Raise at `nominal_speed * multiplier`.
    ///
    /// If the upper limit switch is pressed this becomes an immediate,
    /// unramped stop.
    pub fn raise(&mut self, multiplier: Real) {
        if self.upper_limit.is_pressed() {
            self.immediate_stop();
        } else {
            self.ramp.set_target(self.nominal_speed * multiplier);
            self.apply();
        }
    }

    /// Raise at the nominal speed.
    pub fn raise_full(&mut self) {
        self.raise(1.0);
    }

    /// Whether the upper limit switch is pressed.
    pub fn is_fully_up(&self) -> bool {
        self.upper_limit.is_pressed()
    }

    /// Whether the lower limit switch is pressed.
    pub fn is_fully_down(&self) -> bool {
        self.lower_limit.is_pressed()
    }

    /// Commanded value on the motor right now.
    pub fn commanded(&self) -> Real {
        self.ramp.current()
    }

    fn apply(&mut self) {
        self.motor.set(self.ramp.current());
    }
}

impl Stop for Winch {
    /// Ramped stop: the winch decelerates over the following ticks.
    fn stop(&mut self) {
        self.ramp.set_target(0.0);
        self.apply();
    }
}

impl HardStop for Winch {
    /// Zero the motor now and drop the target, bypassing the ramp.
    fn immediate_stop(&mut self) {
        self.motor.set(0.0);
        self.ramp.set_target(0.0);
    }
}

impl Periodic for Winch {
    fn update(&mut self) {
        self.ramp.step();
        self.apply();
    }
}
