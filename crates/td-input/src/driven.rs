//! The per-tick input consumption contract.

use crate::gamepad::Gamepad;

/// Behaviors that consume one tick of operator input.
///
/// The dispatch loop drives every registered implementation once per tick,
/// before the update pass, so behaviors read levels and edges and set ramp
/// targets while the tick's snapshot is still live.
pub trait GamepadDriven {
    /// Consume the current input state and update behavior accordingly.
    fn drive_by_gamepad(&mut self, pad: &Gamepad);
}
