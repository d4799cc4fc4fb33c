//! td-core: stable foundation for tickdrive.
//!
//! Contains:
//! - numeric (Real + float validation helpers)
//! - tick (tick-rate conversions between per-second and per-tick quantities)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod tick;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TdError, TdResult};
pub use numeric::*;
pub use tick::*;
