//! Error types for behavior construction.

use td_control::ControlError;
use thiserror::Error;

/// Result type for behavior construction.
pub type BehaviorResult<T> = Result<T, BehaviorError>;

/// Errors that can occur while wiring up a behavior.
///
/// Everything here fails fast at construction; per-tick operations are
/// total and cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BehaviorError {
    /// A tuning parameter is outside its valid range.
    #[error("invalid configuration: {what} ({value}) must be between 0 and 1")]
    InvalidConfig { what: &'static str, value: f64 },

    /// An embedded control primitive rejected its parameters.
    #[error(transparent)]
    Control(#[from] ControlError),
}
