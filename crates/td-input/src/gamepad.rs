//! Gamepad wrapper with rising-edge detection.

use td_control::Periodic;
use td_core::Real;
use td_hal::{AxisId, ButtonId, GamepadKind, RawGamepad};

use crate::dpad::DpadOctant;
use crate::error::{InputError, InputResult};

/// An Xbox-layout gamepad with level and edge queries.
///
/// Edge queries compare the live hardware level against the snapshot taken
/// at the end of the previous tick: an edge is reported only during the
/// first tick a signal becomes active, never on release. [`Gamepad::update`]
/// refreshes the snapshot and must run once per tick, after all edge
/// consumers; stale snapshots produce spurious or missed edges.
pub struct Gamepad {
    raw: Box<dyn RawGamepad>,
    last_buttons: [bool; 10],
    last_octants: [bool; 8],
}

impl core::fmt::Debug for Gamepad {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gamepad")
            .field("last_buttons", &self.last_buttons)
            .field("last_octants", &self.last_octants)
            .finish_non_exhaustive()
    }
}

impl Gamepad {
    /// Wrap a raw input device.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DeviceMismatch`] unless the device identifies
    /// as an Xbox-layout gamepad; the behavior layer's mappings assume
    /// that layout.
    pub fn new(raw: impl RawGamepad + 'static) -> InputResult<Self> {
        let found = raw.kind();
        if found != GamepadKind::Xbox {
            return Err(InputError::DeviceMismatch {
                expected: GamepadKind::Xbox,
                found,
            });
        }
        Ok(Self {
            raw: Box::new(raw),
            last_buttons: [false; 10],
            last_octants: [false; 8],
        })
    }

    // ── Levels ──────────────────────────────────────────────────────

    /// Current level of a button.
    pub fn button(&self, button: ButtonId) -> bool {
        self.raw.button(button)
    }

    /// Left stick X, right-positive.
    pub fn left_x(&self) -> Real {
        self.raw.axis(AxisId::LeftX)
    }

    /// Left stick Y, up-positive (the raw axis reports down-positive).
    pub fn left_y(&self) -> Real {
        -self.raw.axis(AxisId::LeftY)
    }

    /// Right stick X, right-positive.
    pub fn right_x(&self) -> Real {
        self.raw.axis(AxisId::RightX)
    }

    /// Right stick Y, up-positive (the raw axis reports down-positive).
    pub fn right_y(&self) -> Real {
        -self.raw.axis(AxisId::RightY)
    }

    /// Left trigger, `[0, 1]`.
    pub fn left_trigger(&self) -> Real {
        self.raw.axis(AxisId::LeftTrigger)
    }

    /// Right trigger, `[0, 1]`.
    pub fn right_trigger(&self) -> Real {
        self.raw.axis(AxisId::RightTrigger)
    }

    /// D-pad angle in degrees clockwise from vertical, `None` when
    /// released.
    pub fn dpad_angle(&self) -> Option<i32> {
        self.raw.dpad_angle()
    }

    /// Whether the d-pad currently selects the given octant. Exact angle
    /// match, no tolerance band.
    pub fn dpad(&self, octant: DpadOctant) -> bool {
        self.dpad_angle() == Some(octant.angle())
    }

    /// Whether any d-pad direction is selected.
    pub fn is_dpad_pressed(&self) -> bool {
        self.dpad_angle().is_some()
    }

    // ── Edges ───────────────────────────────────────────────────────

    /// Whether the button went from released to pressed this tick.
    pub fn button_edge(&self, button: ButtonId) -> bool {
        !self.last_buttons[button.index()] && self.button(button)
    }

    /// Whether the d-pad entered the given octant this tick.
    pub fn dpad_edge(&self, octant: DpadOctant) -> bool {
        !self.last_octants[octant.index()] && self.dpad(octant)
    }
}

impl Periodic for Gamepad {
    /// Snapshot the current levels for next tick's edge detection.
    fn update(&mut self) {
        for button in ButtonId::ALL {
            self.last_buttons[button.index()] = self.raw.button(button);
        }
        for octant in DpadOctant::ALL {
            self.last_octants[octant.index()] = self.dpad(octant);
        }
    }
}
