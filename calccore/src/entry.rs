//! The number currently being typed

use crate::error::CalcError;
use crate::number::Number;
use thiserror::Error;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not a decimal digit: {0:?}")]
pub struct InvalidDigit(pub char);

impl Digit {
    pub fn new(value: u8) -> Option<Digit> {
        (value <= 9).then_some(Digit(value))
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(InvalidDigit(c))
    }
}

/// Text of the number being entered, or an error message.
///
/// Holds `"0"` when empty, at most one `"."`, and an optional leading
/// `"-"`. While an error is set the text is the error message and every
/// editing operation is a no-op until [`EntryBuffer::dismiss_error`].
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBuffer {
    text: String,
    error: Option<CalcError>,
}

impl Default for EntryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBuffer {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            error: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters shown, used for the input length bound.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Nothing typed yet.
    pub fn is_empty(&self) -> bool {
        self.text == "0"
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// The typed number. Only meaningful outside the error state; the
    /// text always parses there, so the zero fallback is never shown.
    pub fn value(&self) -> Number {
        Number::parse_entry(&self.text).unwrap_or_else(|err| {
            tracing::warn!(%err, "entry text is not a number, reading it as 0");
            Number::default()
        })
    }

    pub fn push_digit(&mut self, digit: Digit) {
        if self.is_error() {
            return;
        }
        match self.text.as_str() {
            "0" => self.text.clear(),
            "-0" => self.text.truncate(1),
            _ => {}
        }
        self.text.push(digit.as_char());
    }

    pub fn push_point(&mut self) {
        if self.is_error() || self.text.contains('.') {
            return;
        }
        self.text.push('.');
    }

    /// Toggle the leading minus. Zero has no sign.
    pub fn negate(&mut self) {
        if self.is_error() || self.text == "0" {
            return;
        }
        match self.text.strip_prefix('-') {
            Some(unsigned) => self.text = unsigned.to_string(),
            None => self.text.insert(0, '-'),
        }
    }

    /// Drop the last character, falling back to `"0"` rather than
    /// leaving an empty string or a lone minus.
    pub fn backspace(&mut self) {
        if self.is_error() {
            return;
        }
        if self.len() > 1 {
            self.text.pop();
            if self.text == "-" {
                self.reset();
            }
        } else {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.text = "0".to_string();
        self.error = None;
    }

    pub fn set_result(&mut self, text: String) {
        self.text = text;
        self.error = None;
    }

    pub fn set_error(&mut self, error: CalcError) {
        self.text = error.to_string();
        self.error = Some(error);
    }

    /// Leave the error state, restoring `"0"`. Returns whether an error
    /// was actually dismissed.
    pub fn dismiss_error(&mut self) -> bool {
        if self.is_error() {
            self.reset();
            true
        } else {
            false
        }
    }
}
