//! Simulated hardware for tests and the simulator binary.
//!
//! The control loop is single-threaded, so shared observation handles use
//! `Rc<Cell<_>>`: a behavior owns the actuator exclusively while a test or
//! the simulator keeps a probe on the last commanded value.

use std::cell::Cell;
use std::rc::Rc;

use td_core::Real;

use crate::traits::{Actuator, AxisId, ButtonId, GamepadKind, LimitSwitch, RawGamepad};

/// Simulated motor or servo that records the last commanded value.
#[derive(Debug, Clone, Default)]
pub struct SimActuator {
    value: Rc<Cell<Real>>,
}

impl SimActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared probe observing every write to this actuator.
    pub fn probe(&self) -> Rc<Cell<Real>> {
        Rc::clone(&self.value)
    }

    /// Last commanded value.
    pub fn last(&self) -> Real {
        self.value.get()
    }
}

impl Actuator for SimActuator {
    fn set(&mut self, value: Real) {
        self.value.set(value);
    }
}

/// Simulated limit switch whose level a test can toggle.
#[derive(Debug, Clone, Default)]
pub struct SimSwitch {
    pressed: Rc<Cell<bool>>,
}

impl SimSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared handle for toggling the switch from outside the behavior.
    pub fn lever(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.pressed)
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }
}

impl LimitSwitch for SimSwitch {
    fn is_pressed(&self) -> bool {
        self.pressed.get()
    }
}

/// Scripted gamepad: a test or the simulator sets the frame state between
/// ticks and the control loop reads it like live hardware.
#[derive(Debug, Clone)]
pub struct ScriptedGamepad {
    kind: GamepadKind,
    axes: Rc<Cell<[Real; 6]>>,
    buttons: Rc<Cell<[bool; 10]>>,
    dpad: Rc<Cell<Option<i32>>>,
}

impl ScriptedGamepad {
    /// A neutral Xbox-layout gamepad: centered sticks, nothing pressed.
    pub fn new() -> Self {
        Self::with_kind(GamepadKind::Xbox)
    }

    /// A neutral gamepad reporting the given device kind.
    pub fn with_kind(kind: GamepadKind) -> Self {
        Self {
            kind,
            axes: Rc::new(Cell::new([0.0; 6])),
            buttons: Rc::new(Cell::new([false; 10])),
            dpad: Rc::new(Cell::new(None)),
        }
    }

    pub fn set_axis(&self, axis: AxisId, value: Real) {
        let mut axes = self.axes.get();
        axes[Self::axis_index(axis)] = value;
        self.axes.set(axes);
    }

    pub fn press(&self, button: ButtonId) {
        self.set_button(button, true);
    }

    pub fn release(&self, button: ButtonId) {
        self.set_button(button, false);
    }

    pub fn set_button(&self, button: ButtonId, level: bool) {
        let mut buttons = self.buttons.get();
        buttons[button.index()] = level;
        self.buttons.set(buttons);
    }

    /// Set the d-pad angle, or `None` to release it.
    pub fn set_dpad(&self, angle: Option<i32>) {
        self.dpad.set(angle);
    }

    /// Release all buttons, center all axes, release the d-pad.
    pub fn neutral(&self) {
        self.axes.set([0.0; 6]);
        self.buttons.set([false; 10]);
        self.dpad.set(None);
    }

    fn axis_index(axis: AxisId) -> usize {
        match axis {
            AxisId::LeftX => 0,
            AxisId::LeftY => 1,
            AxisId::LeftTrigger => 2,
            AxisId::RightTrigger => 3,
            AxisId::RightX => 4,
            AxisId::RightY => 5,
        }
    }
}

impl Default for ScriptedGamepad {
    fn default() -> Self {
        Self::new()
    }
}

impl RawGamepad for ScriptedGamepad {
    fn axis(&self, axis: AxisId) -> Real {
        self.axes.get()[Self::axis_index(axis)]
    }

    fn button(&self, button: ButtonId) -> bool {
        self.buttons.get()[button.index()]
    }

    fn dpad_angle(&self) -> Option<i32> {
        self.dpad.get()
    }

    fn kind(&self) -> GamepadKind {
        self.kind
    }
}
