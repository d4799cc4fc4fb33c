//! Error types for operator input.

use td_hal::GamepadKind;
use thiserror::Error;

/// Result type for input device construction.
pub type InputResult<T> = Result<T, InputError>;

/// Errors that can occur when wrapping an input device.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The underlying device does not identify as the required layout.
    #[error("input device mismatch: expected {expected:?}, found {found:?}")]
    DeviceMismatch {
        expected: GamepadKind,
        found: GamepadKind,
    },
}
