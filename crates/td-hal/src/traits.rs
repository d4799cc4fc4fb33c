//! Core traits for injected hardware capabilities.

use serde::{Deserialize, Serialize};
use td_core::Real;

/// A single commanded output channel: a motor controller or a servo.
///
/// Motors accept `[-1, 1]` (signed effort), servos `[0, 1]` (position).
/// Writes take effect immediately; any ramping happens above this trait.
pub trait Actuator {
    /// Command the output value for this channel.
    fn set(&mut self, value: Real);
}

/// A binary travel-limit sensor.
///
/// The raw digital line of these switches is ambiguous (active-low wiring
/// is common); implementations resolve the polarity so that `is_pressed`
/// always means "the mechanism is at this travel limit".
pub trait LimitSwitch {
    /// Whether the switch is currently pressed.
    fn is_pressed(&self) -> bool;
}

/// Identifies the physical layout of a human input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamepadKind {
    /// Xbox-style layout: two sticks, two triggers, ten buttons, d-pad.
    Xbox,
    /// Anything else (flight sticks, generic joysticks).
    Other,
}

/// Analog axis identifiers for an Xbox-style gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisId {
    LeftX,
    LeftY,
    LeftTrigger,
    RightTrigger,
    RightX,
    RightY,
}

/// Button identifiers for an Xbox-style gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    Back,
    Start,
    LeftStick,
    RightStick,
}

impl ButtonId {
    /// All buttons, in a fixed order used for snapshot arrays.
    pub const ALL: [ButtonId; 10] = [
        ButtonId::A,
        ButtonId::B,
        ButtonId::X,
        ButtonId::Y,
        ButtonId::LeftBumper,
        ButtonId::RightBumper,
        ButtonId::Back,
        ButtonId::Start,
        ButtonId::LeftStick,
        ButtonId::RightStick,
    ];

    /// Index of this button within [`ButtonId::ALL`].
    pub fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
            ButtonId::X => 2,
            ButtonId::Y => 3,
            ButtonId::LeftBumper => 4,
            ButtonId::RightBumper => 5,
            ButtonId::Back => 6,
            ButtonId::Start => 7,
            ButtonId::LeftStick => 8,
            ButtonId::RightStick => 9,
        }
    }
}

/// Raw state reads from a human input device.
///
/// Implementations report live hardware state; edge detection and axis
/// sign conventions are layered on top by the input crate.
pub trait RawGamepad {
    /// Raw axis value in `[-1, 1]` (triggers report `[0, 1]`).
    fn axis(&self, axis: AxisId) -> Real;

    /// Raw button level.
    fn button(&self, button: ButtonId) -> bool;

    /// D-pad angle in degrees, one of {0, 45, ..., 315} clockwise from
    /// vertical, or `None` when the d-pad is released.
    fn dpad_angle(&self) -> Option<i32>;

    /// The physical layout this device identifies as.
    fn kind(&self) -> GamepadKind;
}
