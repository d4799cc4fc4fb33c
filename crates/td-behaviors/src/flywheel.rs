//! Multi-state flywheel behavior.

use serde::{Deserialize, Serialize};
use td_core::{is_unit_range, Real};
use td_hal::Actuator;
use td_control::Stop;

use crate::error::{BehaviorError, BehaviorResult};

/// Discrete operating states of a flywheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlywheelState {
    Off,
    Shooting,
    Intaking,
}

/// Mounting direction of a flywheel motor.
///
/// A launcher mounts its two flywheels mirrored so they spin toward each
/// other; the counter-clockwise half inverts every commanded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    fn sign(self) -> Real {
        match self {
            Spin::Clockwise => 1.0,
            Spin::CounterClockwise => -1.0,
        }
    }
}

/// A motor with three fixed operating speeds: shooting, intaking, off.
///
/// State changes write the new output immediately, with no ramping: spin-up
/// and spin-down of a free-spinning wheel are mechanically tolerant.
/// Shooting and intaking drive the wheel in opposite physical directions,
/// so the shooting output carries the opposite sign of the intaking one.
pub struct Flywheel {
    motor: Box<dyn Actuator>,
    state: FlywheelState,
    shoot_speed: Real,
    intake_speed: Real,
    spin_sign: Real,
}

impl core::fmt::Debug for Flywheel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Flywheel")
            .field("state", &self.state)
            .field("shoot_speed", &self.shoot_speed)
            .field("intake_speed", &self.intake_speed)
            .field("spin_sign", &self.spin_sign)
            .finish_non_exhaustive()
    }
}

impl Flywheel {
    /// Create a flywheel and switch it off.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidConfig`] if either speed is outside
    /// `[0, 1]`.
    pub fn new(
        motor: impl Actuator + 'static,
        shoot_speed: Real,
        intake_speed: Real,
        spin: Spin,
    ) -> BehaviorResult<Self> {
        if !is_unit_range(shoot_speed) {
            return Err(BehaviorError::InvalidConfig {
                what: "shoot_speed",
                value: shoot_speed,
            });
        }
        if !is_unit_range(intake_speed) {
            return Err(BehaviorError::InvalidConfig {
                what: "intake_speed",
                value: intake_speed,
            });
        }
        let mut fly = Self {
            motor: Box::new(motor),
            state: FlywheelState::Off,
            shoot_speed,
            intake_speed,
            spin_sign: spin.sign(),
        };
        fly.set_state(FlywheelState::Off);
        Ok(fly)
    }

    /// Current operating state.
    pub fn state(&self) -> FlywheelState {
        self.state
    }

    pub fn shoot_speed(&self) -> Real {
        self.shoot_speed
    }

    pub fn intake_speed(&self) -> Real {
        self.intake_speed
    }

    /// Switch states and write the new fixed output immediately.
    pub fn set_state(&mut self, state: FlywheelState) {
        self.state = state;
        let output = match state {
            FlywheelState::Shooting => -self.shoot_speed * self.spin_sign,
            FlywheelState::Intaking => self.intake_speed * self.spin_sign,
            FlywheelState::Off => 0.0,
        };
        self.motor.set(output);
    }
}

impl Stop for Flywheel {
    fn stop(&mut self) {
        self.set_state(FlywheelState::Off);
    }
}
