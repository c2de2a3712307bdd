use thiserror::Error;

pub type IcResult<T> = Result<T, IcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Field size mismatch for {what} (expected={expected}, found={found})")]
    FieldMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}
