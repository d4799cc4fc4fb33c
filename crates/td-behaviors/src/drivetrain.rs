//! Tank drivetrain behavior.

use td_control::{HardStop, Periodic, Ramp, Stop};
use td_core::{Real, TickRate};
use td_hal::{Actuator, ButtonId};
use td_input::{Gamepad, GamepadDriven};

use crate::config::DriveConfig;
use crate::error::BehaviorResult;

/// Trigger input below this magnitude is treated as noise.
const TRIGGER_DEADBAND: Real = 0.05;

/// The right-side motors are mounted mirrored; their hardware writes are
/// negated unconditionally. Wiring fact, never applied at the ramp level.
const RIGHT_SIDE_SIGN: Real = -1.0;

/// Rotation sign while the left bumper is held (right bumper is the
/// opposite). Wiring-specific convention: negative rotates leftward.
const LEFT_BUMPER_SIGN: Real = -1.0;

/// Two-channel tank drive with ramped acceleration.
///
/// Operator input maps to channel targets in strict priority order each
/// tick:
///
/// 1. **Triggers** (straight drive): right trigger forward, left trigger
///    backward, both channels get the same scaled value.
/// 2. **Bumpers** (slow rotate): active only when exactly one bumper is
///    held and the triggers are idle.
/// 3. **Sticks** (tank): each stick drives one side; near-equal sticks are
///    averaged so intended straight driving stays straight.
///
/// Stick and trigger input passes through a non-linear response curve for
/// finer low-speed control. The two channels are always stepped and
/// applied together, so the sides never desynchronize by more than one
/// tick.
pub struct DriveTrain {
    front_left: Box<dyn Actuator>,
    front_right: Box<dyn Actuator>,
    back_left: Box<dyn Actuator>,
    back_right: Box<dyn Actuator>,
    left: Ramp,
    right: Ramp,
    bumper_rot_speed: Real,
    straightening_threshold: Real,
    input_exponent: Real,
}

impl DriveTrain {
    /// Create a drivetrain with default tuning and the given per-tick
    /// acceleration cap.
    pub fn new(
        front_left: impl Actuator + 'static,
        front_right: impl Actuator + 'static,
        back_left: impl Actuator + 'static,
        back_right: impl Actuator + 'static,
        max_step: Real,
    ) -> BehaviorResult<Self> {
        let tuning = DriveConfig::default();
        Ok(Self {
            front_left: Box::new(front_left),
            front_right: Box::new(front_right),
            back_left: Box::new(back_left),
            back_right: Box::new(back_right),
            left: Ramp::new(-1.0, 1.0, max_step)?,
            right: Ramp::new(-1.0, 1.0, max_step)?,
            bumper_rot_speed: tuning.bumper_rot_speed,
            straightening_threshold: tuning.straightening_threshold,
            input_exponent: tuning.input_exponent,
        })
    }

    /// Create a drivetrain from per-second tuning.
    pub fn from_config(
        front_left: impl Actuator + 'static,
        front_right: impl Actuator + 'static,
        back_left: impl Actuator + 'static,
        back_right: impl Actuator + 'static,
        cfg: &DriveConfig,
        rate: TickRate,
    ) -> BehaviorResult<Self> {
        let mut drive = Self::new(
            front_left,
            front_right,
            back_left,
            back_right,
            rate.per_tick(cfg.max_accel_per_sec),
        )?;
        drive.bumper_rot_speed = cfg.bumper_rot_speed;
        drive.straightening_threshold = cfg.straightening_threshold;
        drive.input_exponent = cfg.input_exponent;
        Ok(drive)
    }

    // ── Tuning ──────────────────────────────────────────────────────

    pub fn bumper_rot_speed(&self) -> Real {
        self.bumper_rot_speed
    }

    pub fn set_bumper_rot_speed(&mut self, value: Real) {
        self.bumper_rot_speed = value;
    }

    pub fn straightening_threshold(&self) -> Real {
        self.straightening_threshold
    }

    pub fn set_straightening_threshold(&mut self, value: Real) {
        self.straightening_threshold = value;
    }

    pub fn input_exponent(&self) -> Real {
        self.input_exponent
    }

    pub fn set_input_exponent(&mut self, value: Real) {
        self.input_exponent = value;
    }

    pub fn max_accel(&self) -> Real {
        self.left.max_step()
    }

    /// Retune the per-tick acceleration cap on both channels.
    pub fn set_max_accel(&mut self, value: Real) {
        self.left.set_max_step(value);
        self.right.set_max_step(value);
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Ramp both channels to the same speed.
    pub fn drive_straight(&mut self, speed: Real) {
        self.left.set_target(speed);
        self.right.set_target(speed);
        self.apply();
    }

    /// Ramp the channels to opposite speeds. Negative rates rotate left,
    /// positive rates rotate right.
    pub fn drive_rotate(&mut self, rate: Real) {
        self.left.set_target(rate);
        self.right.set_target(-rate);
        self.apply();
    }

    /// Channel targets as (left, right), mostly for tests and telemetry.
    pub fn targets(&self) -> (Real, Real) {
        (self.left.target(), self.right.target())
    }

    /// Apply the non-linear response curve.
    ///
    /// Exponentiation flattens the curve near zero for fine control, but
    /// an even exponent erases the input's sign; restore it so reverse
    /// input still drives in reverse.
    fn scale(&self, value: Real) -> Real {
        let scaled = value.powf(self.input_exponent);
        if scaled > 0.0 && value < 0.0 {
            -scaled
        } else {
            scaled
        }
    }

    /// Write the commanded channel values to all four motors.
    fn apply(&mut self) {
        let left = self.left.current();
        let right = RIGHT_SIDE_SIGN * self.right.current();
        self.front_left.set(left);
        self.back_left.set(left);
        self.front_right.set(right);
        self.back_right.set(right);
    }
}

impl GamepadDriven for DriveTrain {
    fn drive_by_gamepad(&mut self, pad: &Gamepad) {
        let triggers = pad.right_trigger() - pad.left_trigger();
        let net_bumper =
            pad.button(ButtonId::RightBumper) != pad.button(ButtonId::LeftBumper);

        if triggers.abs() > TRIGGER_DEADBAND {
            // Trigger mode: drive straight.
            let scaled = self.scale(triggers);
            self.left.set_target(scaled);
            self.right.set_target(scaled);
        } else if net_bumper {
            // Bumper mode: rotate slowly in place.
            let mut rate = self.bumper_rot_speed;
            if pad.button(ButtonId::LeftBumper) {
                rate *= LEFT_BUMPER_SIGN;
            }
            self.left.set_target(rate);
            self.right.set_target(-rate);
        } else {
            // Stick mode: tank drive with auto-straightening.
            let mut left_val = pad.left_y();
            let mut right_val = pad.right_y();

            if (left_val - right_val).abs() <= self.straightening_threshold {
                let average = (left_val + right_val) / 2.0;
                left_val = average;
                right_val = average;
            }

            self.left.set_target(self.scale(left_val));
            self.right.set_target(self.scale(right_val));
        }

        self.apply();
    }
}

impl Periodic for DriveTrain {
    fn update(&mut self) {
        self.left.step();
        self.right.step();
        self.apply();
    }
}

impl Stop for DriveTrain {
    /// Ramp both channels down to zero.
    fn stop(&mut self) {
        self.drive_straight(0.0);
    }
}

impl HardStop for DriveTrain {
    /// Zero all four motors and both targets at once, bypassing the ramps.
    fn immediate_stop(&mut self) {
        self.front_left.set(0.0);
        self.front_right.set(0.0);
        self.back_left.set(0.0);
        self.back_right.set(0.0);
        self.left.set_target(0.0);
        self.right.set_target(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use td_hal::{AxisId, ScriptedGamepad, SimActuator};

    struct Probes {
        front_left: Rc<Cell<Real>>,
        front_right: Rc<Cell<Real>>,
        back_left: Rc<Cell<Real>>,
        back_right: Rc<Cell<Real>>,
    }

    fn test_drive(max_step: Real) -> (DriveTrain, Probes) {
        let (fl, fr, bl, br) = (
            SimActuator::new(),
            SimActuator::new(),
            SimActuator::new(),
            SimActuator::new(),
        );
        let probes = Probes {
            front_left: fl.probe(),
            front_right: fr.probe(),
            back_left: bl.probe(),
            back_right: br.probe(),
        };
        let drive = DriveTrain::new(fl, fr, bl, br, max_step).unwrap();
        (drive, probes)
    }

    fn xbox_pad() -> (ScriptedGamepad, Gamepad) {
        let script = ScriptedGamepad::new();
        let pad = Gamepad::new(script.clone()).unwrap();
        (script, pad)
    }

    #[test]
    fn triggers_drive_straight() {
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();
        script.set_axis(AxisId::RightTrigger, 0.5);
        drive.drive_by_gamepad(&pad);
        // scale(0.5) with exponent 2 = 0.25 on both channels.
        let (left, right) = drive.targets();
        assert!((left - 0.25).abs() < 1e-12);
        assert!((right - 0.25).abs() < 1e-12);
    }

    #[test]
    fn reverse_trigger_keeps_sign() {
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();
        script.set_axis(AxisId::LeftTrigger, 0.5);
        drive.drive_by_gamepad(&pad);
        let (left, right) = drive.targets();
        assert!((left + 0.25).abs() < 1e-12);
        assert!((right + 0.25).abs() < 1e-12);
    }

    #[test]
    fn trigger_deadband_falls_through_to_sticks() {
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();
        script.set_axis(AxisId::RightTrigger, 0.04);
        script.set_axis(AxisId::LeftY, -0.6); // raw is down-positive
        script.set_axis(AxisId::RightY, -0.6);
        drive.drive_by_gamepad(&pad);
        let (left, right) = drive.targets();
        assert!((left - 0.36).abs() < 1e-12);
        assert!((right - 0.36).abs() < 1e-12);
    }

    #[test]
    fn single_bumper_rotates_in_place() {
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();

        script.press(ButtonId::RightBumper);
        drive.drive_by_gamepad(&pad);
        let (left, right) = drive.targets();
        assert!((left - 0.2).abs() < 1e-12);
        assert!((right + 0.2).abs() < 1e-12);

        // Left bumper rotates the other way.
        script.release(ButtonId::RightBumper);
        script.press(ButtonId::LeftBumper);
        drive.drive_by_gamepad(&pad);
        let (left, right) = drive.targets();
        assert!((left + 0.2).abs() < 1e-12);
        assert!((right - 0.2).abs() < 1e-12);
    }

    #[test]
    fn both_bumpers_cancel_out() {
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();
        script.press(ButtonId::LeftBumper);
        script.press(ButtonId::RightBumper);
        script.set_axis(AxisId::LeftY, -0.5);
        script.set_axis(AxisId::RightY, -0.5);
        drive.drive_by_gamepad(&pad);
        // Falls through to stick mode instead of rotating.
        let (left, right) = drive.targets();
        assert!(left > 0.0);
        assert!((left - right).abs() < 1e-12);
    }

    #[test]
    fn near_equal_sticks_are_averaged() {
        // The canonical scenario: threshold 0.2, sticks 0.5 and 0.62.
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();
        script.set_axis(AxisId::LeftY, -0.5);
        script.set_axis(AxisId::RightY, -0.62);
        drive.drive_by_gamepad(&pad);
        let expected = 0.56_f64.powf(2.0);
        let (left, right) = drive.targets();
        assert!((left - expected).abs() < 1e-12);
        assert!((right - expected).abs() < 1e-12);
    }

    #[test]
    fn disagreeing_sticks_stay_independent() {
        let (mut drive, _probes) = test_drive(0.1);
        let (script, pad) = xbox_pad();
        script.set_axis(AxisId::LeftY, -0.9);
        script.set_axis(AxisId::RightY, 0.3);
        drive.drive_by_gamepad(&pad);
        let (left, right) = drive.targets();
        assert!((left - 0.81).abs() < 1e-12);
        assert!((right + 0.09).abs() < 1e-12);
    }

    #[test]
    fn right_side_writes_are_inverted() {
        let (mut drive, probes) = test_drive(1.0);
        drive.drive_straight(0.5);
        drive.update();
        assert_eq!(probes.front_left.get(), 0.5);
        assert_eq!(probes.back_left.get(), 0.5);
        assert_eq!(probes.front_right.get(), -0.5);
        assert_eq!(probes.back_right.get(), -0.5);
    }

    #[test]
    fn rotate_sets_opposite_channels() {
        let (mut drive, probes) = test_drive(1.0);
        drive.drive_rotate(0.4);
        drive.update();
        assert_eq!(probes.front_left.get(), 0.4);
        // Right channel is -0.4, negated again at the write.
        assert_eq!(probes.front_right.get(), 0.4);
    }

    #[test]
    fn update_ramps_motors_gradually() {
        let (mut drive, probes) = test_drive(0.1);
        drive.drive_straight(1.0);
        drive.update();
        assert!((probes.front_left.get() - 0.1).abs() < 1e-12);
        for _ in 0..9 {
            drive.update();
        }
        assert_eq!(probes.front_left.get(), 1.0);
    }

    #[test]
    fn immediate_stop_zeroes_everything_now() {
        let (mut drive, probes) = test_drive(0.1);
        drive.drive_straight(1.0);
        for _ in 0..5 {
            drive.update();
        }
        drive.immediate_stop();
        assert_eq!(probes.front_left.get(), 0.0);
        assert_eq!(probes.front_right.get(), 0.0);
        assert_eq!(probes.back_left.get(), 0.0);
        assert_eq!(probes.back_right.get(), 0.0);
        let (left, right) = drive.targets();
        assert_eq!(left, 0.0);
        assert_eq!(right, 0.0);
    }

    #[test]
    fn odd_exponent_passes_sign_through() {
        let (mut drive, _probes) = test_drive(0.1);
        drive.set_input_exponent(3.0);
        assert!((drive.scale(-0.5) + 0.125).abs() < 1e-12);
        assert!((drive.scale(0.5) - 0.125).abs() < 1e-12);
    }
}
