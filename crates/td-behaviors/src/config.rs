//! Serde-deserializable tuning for a complete rig.
//!
//! Acceleration tunables are stored in units-per-second and converted to
//! per-tick ramp steps with [`td_core::TickRate`], so a config file stays
//! valid when the loop frequency changes. Defaults mirror the competition
//! tuning the behaviors were built around.

use serde::{Deserialize, Serialize};
use td_core::Real;

/// Drivetrain tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Maximum change in commanded motor value, per second.
    pub max_accel_per_sec: Real,
    /// Rotation speed while a single bumper is held.
    pub bumper_rot_speed: Real,
    /// Maximum stick disagreement that still counts as "driving straight".
    pub straightening_threshold: Real,
    /// Exponent of the input response curve.
    pub input_exponent: Real,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            max_accel_per_sec: 4.5,
            bumper_rot_speed: 0.2,
            straightening_threshold: 0.2,
            input_exponent: 2.0,
        }
    }
}

/// Winch tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinchConfig {
    /// Nominal winch speed at multiplier 1.
    pub nominal_speed: Real,
    /// Maximum change in commanded motor value, per second.
    pub max_accel_per_sec: Real,
}

impl Default for WinchConfig {
    fn default() -> Self {
        Self {
            nominal_speed: 0.8,
            max_accel_per_sec: 10.0,
        }
    }
}

/// Launcher tuning: flywheel speeds and pusher end positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Flywheel speed while shooting, `[0, 1]`.
    pub shoot_speed: Real,
    /// Flywheel speed while intaking, `[0, 1]`.
    pub intake_speed: Real,
    /// Servo position of the retracted pusher, `[0, 1]`.
    pub pusher_retracted: Real,
    /// Servo position of the extended pusher, `[0, 1]`.
    pub pusher_extended: Real,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            shoot_speed: 1.0,
            intake_speed: 0.4,
            pusher_retracted: 0.15,
            pusher_extended: 0.55,
        }
    }
}

/// Top-level tuning for a complete rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Control loop frequency in Hz.
    pub tick_hz: Real,
    pub drive: DriveConfig,
    pub winch: WinchConfig,
    pub launcher: LauncherConfig,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            tick_hz: 50.0,
            drive: DriveConfig::default(),
            winch: WinchConfig::default(),
            launcher: LauncherConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_competition_tuning() {
        let cfg = RigConfig::default();
        assert_eq!(cfg.tick_hz, 50.0);
        assert_eq!(cfg.drive.max_accel_per_sec, 4.5);
        assert_eq!(cfg.winch.nominal_speed, 0.8);
        assert_eq!(cfg.launcher.intake_speed, 0.4);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: RigConfig = serde_yaml::from_str("drive:\n  input_exponent: 3.0\n").unwrap();
        assert_eq!(cfg.drive.input_exponent, 3.0);
        assert_eq!(cfg.drive.bumper_rot_speed, 0.2);
        assert_eq!(cfg.tick_hz, 50.0);
    }
}
