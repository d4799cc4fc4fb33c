//! Rate-limited value control primitives for tickdrive.
//!
//! This crate provides the building blocks under every mechanism behavior:
//!
//! - [`Ramp`]: a bounded scalar that steps toward a target by at most a
//!   fixed per-tick delta, so commanded actuator values never jump.
//! - [`Periodic`]: the "advance internal state by one tick" contract the
//!   dispatch loop drives on every ramped component and the input tracker.
//! - [`Stop`] / [`HardStop`]: graceful (ramped) and immediate (unramped)
//!   stop contracts. Hard stops exist because a mechanism that is only
//!   asked to decelerate can still travel past a physical limit before its
//!   ramp reaches zero.
//!
//! All per-tick operations are total: construction validates parameters
//! once and the tick path cannot fail.

pub mod error;
pub mod periodic;
pub mod ramp;

pub use error::{ControlError, ControlResult};
pub use periodic::{HardStop, Periodic, Stop};
pub use ramp::Ramp;
