//! Mechanism behaviors for tickdrive.
//!
//! Each behavior composes ramps, limit switches and multi-state outputs
//! into one input-to-actuation policy, evaluated once per tick:
//!
//! - [`DriveTrain`]: two-channel tank drive with trigger, bumper and stick
//!   modes, auto-straightening and a non-linear response curve.
//! - [`Winch`]: a single ramped motor vetoed by two travel-limit switches.
//! - [`Flywheel`]: discrete Off/Shooting/Intaking output with fixed
//!   per-state speeds.
//! - [`Pusher`]: binary-position servo.
//! - [`Launcher`]: winch + mirrored flywheel pair + pusher, sequenced from
//!   operator input.
//! - [`Rig`]: the ordered dispatch lists driving every behavior and the
//!   input snapshot in the load-bearing per-tick order.
//!
//! All hardware handles are injected [`td_hal`] capabilities; behaviors
//! own them exclusively.

pub mod config;
pub mod drivetrain;
pub mod error;
pub mod flywheel;
pub mod launcher;
pub mod pusher;
pub mod rig;
pub mod winch;

pub use config::{DriveConfig, LauncherConfig, RigConfig, WinchConfig};
pub use drivetrain::DriveTrain;
pub use error::{BehaviorError, BehaviorResult};
pub use flywheel::{Flywheel, FlywheelState, Spin};
pub use launcher::Launcher;
pub use pusher::Pusher;
pub use rig::Rig;
pub use winch::Winch;
