//! The four binary operators and the function each one selects

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Button order used by the keypad.
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "/",
        }
    }

    /// Combine `left` and `right`.
    ///
    /// Dividing by zero is an error: `0 / 0` is [`CalcError::UndefinedResult`],
    /// anything else over zero is [`CalcError::DivisionByZero`]. A result
    /// that leaves the finite f64 range is [`CalcError::Overflow`].
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(if left == 0.0 {
                        CalcError::UndefinedResult
                    } else {
                        CalcError::DivisionByZero
                    });
                }
                left / right
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
