//! Hardware capability traits for tickdrive.
//!
//! The control core never constructs hardware handles. Motor controllers,
//! servos, limit switches and the gamepad are injected behind the traits in
//! this crate, so the behavior layer is testable against the simulated
//! implementations in [`sim`] and portable across driver stacks.

pub mod sim;
pub mod traits;

pub use sim::{ScriptedGamepad, SimActuator, SimSwitch};
pub use traits::{Actuator, AxisId, ButtonId, GamepadKind, LimitSwitch, RawGamepad};
