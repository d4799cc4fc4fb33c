use thiserror::Error;

pub type TdResult<T> = Result<T, TdError>;

#[derive(Error, Debug)]
pub enum TdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
