use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text operand that is not a decimal number.
    #[error("invalid numeric input: {0:?}")]
    InvalidNumericInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
