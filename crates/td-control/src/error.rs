//! Error types for control primitives.

use thiserror::Error;

/// Result type for control primitive construction.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when configuring control primitives.
///
/// All variants are construction-time: wrong configuration is a
/// programming error, not a transient fault, so nothing here is retried
/// or recovered mid-tick.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control primitive constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
