//! Integer addition over loosely typed operands.
//!
//! Each operand is an integer, a float or a piece of numeric text. Both are
//! converted to integers by truncating toward zero and then summed.
//!
//! ```rust
//! use sumame::add;
//!
//! assert_eq!(add(10, 10).unwrap(), 20);
//! assert_eq!(add("10", "10").unwrap(), 20);
//! assert_eq!(add(10.0, 10.5).unwrap(), 20);
//! assert_eq!(add("12 apples", 3).unwrap(), 15);
//! assert!(add("ten", 1).is_err());
//! ```

mod error;
mod operand;

pub use error::{Error, Result};
pub use operand::Operand;

/// Truncate both operands toward zero and return their sum.
///
/// Text is read up to the end of its leading decimal number. Text that does
/// not start with one fails with [`Error::InvalidNumericInput`]; the first
/// operand is checked first. The sum saturates at the bounds of
/// [`i64`].
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<i64> {
    let a = a.into().to_integer()?;
    let b = b.into().to_integer()?;
    Ok(a.saturating_add(b))
}
