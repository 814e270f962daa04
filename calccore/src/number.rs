//! Numeric values behind the entry text, and how results are displayed

use crate::error::ParseNumberError;
use std::fmt;

/// A number as typed or computed.
///
/// Whether it is an integer or a float only changes how it prints:
/// arithmetic always happens on [`Number::value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Parse the text of an entry buffer.
    ///
    /// A trailing point is ignored, so `"5."` is the integer 5. Integers
    /// too long for an i64 are read as floats.
    pub fn parse_entry(text: &str) -> Result<Number, ParseNumberError> {
        let trimmed = text.trim_end_matches('.');
        let invalid = || ParseNumberError(text.to_string());

        if trimmed.contains('.') {
            return trimmed.parse::<f64>().map(Number::Float).map_err(|_| invalid());
        }
        if !is_integer_literal(trimmed) {
            return Err(invalid());
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Ok(Number::Integer(n)),
            Err(_) => trimmed.parse::<f64>().map(Number::Float).map_err(|_| invalid()),
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        self.value() == 0.0
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Float(v) => f.write_str(&normalize_number(*v)),
        }
    }
}

/// Optional minus followed by at least one ASCII digit.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render `n` in its shortest decimal form without a redundant `.0`.
///
/// `4.0` is `"4"`, `4.5` stays `"4.5"`. Negative zero prints as `"0"`
/// and exponent notation is never used, so the output always parses
/// back through [`Number::parse_entry`].
pub fn normalize_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let s = n.to_string();
    match s.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}
