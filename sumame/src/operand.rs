use tracing::{debug, trace};

use crate::error::{Error, Result};

/// One side of an addition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Float(f64),
    /// Text starting with a decimal number, such as `"10"`, `" -3.75"`,
    /// `"1e3"` or `"12 apples"`.
    NumericText(String),
}

impl Operand {
    /// Convert to an integer, discarding any fractional part.
    ///
    /// Floats outside the range of [`i64`] saturate and NaN becomes zero.
    /// Text is read up to the end of its leading decimal number, after any
    /// leading ASCII whitespace. Text with no leading number fails with
    /// [`Error::InvalidNumericInput`].
    pub fn to_integer(&self) -> Result<i64> {
        let value = match self {
            Operand::Integer(n) => *n,
            Operand::Float(x) => truncate(*x),
            Operand::NumericText(text) => parse_text(text)?,
        };
        trace!(operand = ?self, value, "converted operand");
        Ok(value)
    }
}

// `as` rounds toward zero and saturates.
fn truncate(x: f64) -> i64 {
    x as i64
}

fn parse_text(text: &str) -> Result<i64> {
    let trimmed = text.trim_start_matches(is_blank);
    let number = &trimmed[..numeric_prefix_len(trimmed)];

    if number.is_empty() {
        debug!(text, "rejected non-numeric text");
        return Err(Error::InvalidNumericInput(text.to_string()));
    }

    // Whole numbers skip the float path so large values stay exact.
    if let Ok(n) = number.parse::<i64>() {
        return Ok(n);
    }

    number
        .parse::<f64>()
        .map(truncate)
        .map_err(|_| Error::InvalidNumericInput(text.to_string()))
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Length of the longest prefix matching
/// `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at least one
/// mantissa digit, or zero when there is none.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    // An exponent only counts when it has digits: "1e" reads as "1".
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

macro_rules! impl_from_integer {
    ($int_ty:ty) => {
        impl From<$int_ty> for Operand {
            fn from(value: $int_ty) -> Self {
                Operand::Integer(i64::from(value))
            }
        }
    };
}

impl_from_integer!(i8);
impl_from_integer!(u8);

impl_from_integer!(i16);
impl_from_integer!(u16);

impl_from_integer!(i32);
impl_from_integer!(u32);

impl_from_integer!(i64);

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::NumericText(value.to_string())
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::NumericText(value.clone())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::NumericText(value)
    }
}
