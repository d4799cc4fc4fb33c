//! Operator input layer for tickdrive.
//!
//! Wraps a raw gamepad capability with the conveniences the behavior layer
//! actually consumes:
//!
//! - sign-corrected axis reads (stick Y is up-positive),
//! - level queries for every button and d-pad octant,
//! - rising-edge queries computed against the previous tick's snapshot,
//! - the [`GamepadDriven`] contract behaviors implement to consume one
//!   tick of input.
//!
//! Edges are per-tick state: the snapshot must refresh exactly once per
//! tick, after every edge consumer has run. The [`Gamepad`] implements
//! [`td_control::Periodic`] for exactly that purpose.

pub mod dpad;
pub mod driven;
pub mod error;
pub mod gamepad;

pub use dpad::DpadOctant;
pub use driven::GamepadDriven;
pub use error::{InputError, InputResult};
pub use gamepad::Gamepad;
