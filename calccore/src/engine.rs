//! Calculator engine
//!
//! Interprets button presses one at a time. Each call to
//! [`Engine::handle`] is a complete state transition that returns the
//! [`View`] to render.

use crate::config::CalcConfig;
use crate::entry::{Digit, EntryBuffer};
use crate::error::CalcError;
use crate::number::normalize_number;
use crate::operator::Operator;
use crate::pending::{Pending, Stage};

/// A button press forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    Point,
    Negate,
    Backspace,
    ClearEntry,
    ClearAll,
    Operator(Operator),
    Equals,
}

/// Everything the presentation layer needs to draw the display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    pub entry_text: String,
    pub pending_text: String,
    pub is_error: bool,
    /// Operators, negate, point, clear-all and equals are unavailable.
    pub controls_disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    entry: EntryBuffer,
    pending: Option<Pending>,
    max_entry_len: Option<usize>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose [`Engine::handle`] stops accepting digits once the
    /// entry reaches `config.max_entry_len` characters.
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            max_entry_len: Some(config.max_entry_len),
            ..Self::default()
        }
    }

    pub fn entry(&self) -> &EntryBuffer {
        &self.entry
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Apply one event and return the resulting view.
    ///
    /// Digit, backspace, clear-entry and clear-all dismiss an error before
    /// doing their own work. Point, negate, operators and equals are inert
    /// while an error is shown.
    pub fn handle(&mut self, event: Event) -> View {
        tracing::debug!(?event, "handling event");
        match event {
            Event::Digit(digit) => {
                self.dismiss_error_if_any();
                self.drop_final_equation();
                if !self.entry_is_full() {
                    self.digit(digit);
                }
            }
            Event::Point => self.add_point(),
            Event::Negate => self.negate(),
            Event::Backspace => self.backspace(),
            Event::ClearEntry => self.clear_entry(),
            Event::ClearAll => self.clear_all(),
            Event::Operator(op) => self.apply_operator(op),
            Event::Equals => {
                if let Err(err) = self.evaluate() {
                    tracing::debug!(%err, "equals entered the error state");
                }
            }
        }
        self.view()
    }

    pub fn view(&self) -> View {
        let is_error = self.entry.is_error();
        View {
            entry_text: self.entry.text().to_string(),
            pending_text: self.pending.map(|p| p.text()).unwrap_or_default(),
            is_error,
            controls_disabled: is_error,
        }
    }

    fn entry_is_full(&self) -> bool {
        match self.max_entry_len {
            Some(max) => !self.entry.is_empty() && self.entry.len() >= max,
            None => false,
        }
    }

    /// Restore a usable entry if an error is showing.
    pub fn dismiss_error_if_any(&mut self) -> bool {
        let dismissed = self.entry.dismiss_error();
        if dismissed {
            tracing::debug!("error dismissed");
        }
        dismissed
    }

    /// Type a digit. A completed equation is dropped first, then the
    /// digit replaces a lone `"0"` or is appended.
    pub fn digit(&mut self, digit: Digit) {
        if self.entry.is_error() {
            return;
        }
        self.drop_final_equation();
        self.entry.push_digit(digit);
    }

    /// Forget a computation already completed by equals.
    fn drop_final_equation(&mut self) {
        if self.pending.is_some_and(|p| p.is_final()) {
            self.pending = None;
        }
    }

    pub fn add_point(&mut self) {
        self.entry.push_point();
    }

    pub fn negate(&mut self) {
        self.entry.negate();
    }

    pub fn backspace(&mut self) {
        self.dismiss_error_if_any();
        self.entry.backspace();
    }

    pub fn clear_entry(&mut self) {
        self.dismiss_error_if_any();
        self.entry.reset();
    }

    pub fn clear_all(&mut self) {
        self.dismiss_error_if_any();
        self.entry.reset();
        self.pending = None;
    }

    /// Press an operator button.
    ///
    /// With nothing pending, or after equals, the entry becomes the left
    /// operand. With an open computation a different operator replaces
    /// the pending one, and the same operator evaluates and re-arms with
    /// the result as a running total.
    pub fn apply_operator(&mut self, op: Operator) {
        if self.entry.is_error() {
            return;
        }
        match self.pending {
            Some(pending) if !pending.is_final() => {
                if pending.operator != op {
                    self.pending = Some(Pending {
                        operator: op,
                        ..pending
                    });
                } else if let Ok(Some(_)) = self.evaluate() {
                    self.commit(op);
                }
            }
            _ => self.commit(op),
        }
    }

    fn commit(&mut self, op: Operator) {
        self.pending = Some(Pending::open(self.entry.value(), op));
        self.entry.reset();
    }

    /// Evaluate the open computation with the entry as right operand.
    ///
    /// Returns `Ok(None)` when there is nothing to evaluate: no pending
    /// computation, one already finalized by equals, or an error on
    /// screen. On success the entry shows the result and the pending
    /// computation becomes a completed equation. On failure the engine
    /// enters the error state and the pending computation is kept.
    pub fn evaluate(&mut self) -> Result<Option<String>, CalcError> {
        let Some(pending) = self.pending else {
            return Ok(None);
        };
        if pending.is_final() || self.entry.is_error() {
            return Ok(None);
        }

        let right = self.entry.value();
        match pending.operator.apply(pending.left.value(), right.value()) {
            Ok(value) => {
                let result = normalize_number(value);
                self.pending = Some(Pending {
                    stage: Stage::Final { right },
                    ..pending
                });
                tracing::debug!(
                    left = %pending.left,
                    operator = %pending.operator,
                    %right,
                    %result,
                    "evaluated"
                );
                self.entry.set_result(result.clone());
                Ok(Some(result))
            }
            Err(err) => {
                tracing::debug!(%err, "evaluation failed");
                self.entry.set_error(err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Number;

    /// Feed a key string: digits, `.` point, `~` negate, `<` backspace,
    /// `e` clear entry, `c` clear all, `+ - * /` operators, `=` equals.
    fn press(engine: &mut Engine, keys: &str) -> View {
        let mut view = engine.view();
        for key in keys.chars() {
            let event = match key {
                '.' => Event::Point,
                '~' => Event::Negate,
                '<' => Event::Backspace,
                'e' => Event::ClearEntry,
                'c' => Event::ClearAll,
                '+' => Event::Operator(Operator::Add),
                '-' => Event::Operator(Operator::Subtract),
                '*' => Event::Operator(Operator::Multiply),
                '/' => Event::Operator(Operator::Divide),
                '=' => Event::Equals,
                _ => Event::Digit(Digit::try_from(key).unwrap()),
            };
            view = engine.handle(event);
        }
        view
    }

    fn run(keys: &str) -> View {
        press(&mut Engine::new(), keys)
    }

    #[test]
    fn test_fresh_view() {
        let view = Engine::new().view();
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "");
        assert!(!view.is_error);
        assert!(!view.controls_disabled);
    }

    #[test]
    fn test_digits_collapse_leading_zero() {
        assert_eq!(run("05").entry_text, "5");
        assert_eq!(run("00300").entry_text, "300");
    }

    #[test]
    fn test_point_and_negate() {
        assert_eq!(run("3..").entry_text, "3.");
        assert_eq!(run("~").entry_text, "0");
        assert_eq!(run("25~").entry_text, "-25");
        assert_eq!(run("25~~").entry_text, "25");
    }

    #[test]
    fn test_end_to_end_subtraction() {
        let view = run("7-2=");
        assert_eq!(view.pending_text, "7 - 2 =");
        assert_eq!(view.entry_text, "5");
    }

    #[test]
    fn test_division() {
        let view = run("10/2=");
        assert_eq!(view.entry_text, "5");
        assert_eq!(view.pending_text, "10 / 2 =");

        let view = run("0/0=");
        assert!(view.is_error);
        assert!(view.controls_disabled);
        assert_eq!(view.entry_text, "Result is undefined");
        assert_eq!(view.pending_text, "0 / ");

        let mut engine = Engine::new();
        let view = press(&mut engine, "5/0=");
        assert_eq!(view.entry_text, "Division by zero");
        assert_eq!(engine.entry().error(), Some(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_outcomes() {
        let mut engine = Engine::new();
        assert_eq!(engine.evaluate(), Ok(None));

        press(&mut engine, "9/4");
        assert_eq!(engine.evaluate(), Ok(Some("2.25".to_string())));
        assert_eq!(engine.evaluate(), Ok(None));

        press(&mut engine, "c0/0");
        assert_eq!(engine.evaluate(), Err(CalcError::UndefinedResult));
    }

    #[test]
    fn test_same_operator_keeps_running_total() {
        let mut engine = Engine::new();
        let view = press(&mut engine, "5+3+");
        let pending = engine.pending().unwrap();
        assert_eq!(pending.left, Number::Integer(8));
        assert_eq!(pending.operator, Operator::Add);
        assert!(!pending.is_final());
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "8 + ");

        assert_eq!(press(&mut engine, "4+").pending_text, "12 + ");
    }

    #[test]
    fn test_different_operator_substitutes() {
        let mut engine = Engine::new();
        let view = press(&mut engine, "5+*");
        let pending = engine.pending().unwrap();
        assert_eq!(pending.left, Number::Integer(5));
        assert_eq!(pending.operator, Operator::Multiply);
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "5 × ");

        // an operand typed before the switch is kept, not evaluated
        let view = run("5+3*");
        assert_eq!(view.entry_text, "3");
        assert_eq!(view.pending_text, "5 × ");
        assert_eq!(run("5+3*=").entry_text, "15");
    }

    #[test]
    fn test_operator_after_equals_starts_fresh() {
        let view = run("7-2=*3=");
        assert_eq!(view.pending_text, "5 × 3 =");
        assert_eq!(view.entry_text, "15");

        let view = run("7-2=-");
        assert_eq!(view.pending_text, "5 - ");
        assert_eq!(view.entry_text, "0");
    }

    #[test]
    fn test_equals_is_noop_without_open_computation() {
        assert_eq!(run("5=").entry_text, "5");
        assert_eq!(run("5=").pending_text, "");

        let view = run("7-2==");
        assert_eq!(view.pending_text, "7 - 2 =");
        assert_eq!(view.entry_text, "5");
    }

    #[test]
    fn test_digit_after_equals_drops_equation() {
        let view = run("7-2=4");
        assert_eq!(view.pending_text, "");
        assert_eq!(view.entry_text, "54");

        let view = run("2-2=4");
        assert_eq!(view.entry_text, "4");
    }

    #[test]
    fn test_float_formatting() {
        let view = run("1.5+1.5=");
        assert_eq!(view.pending_text, "1.5 + 1.5 =");
        assert_eq!(view.entry_text, "3");

        assert_eq!(run("5.+").pending_text, "5 + ");
        assert_eq!(run("0.1+0.2=").entry_text, "0.30000000000000004");
        assert_eq!(run("3~*0=").entry_text, "0");
    }

    #[test]
    fn test_digit_dismisses_error() {
        let mut engine = Engine::new();
        press(&mut engine, "5/0=");
        let view = press(&mut engine, "9");
        assert_eq!(view.entry_text, "9");
        assert!(!view.is_error);
        assert_eq!(view.pending_text, "5 / ");

        let view = press(&mut engine, "=");
        assert_eq!(view.pending_text, "5 / 9 =");
        assert_eq!(view.entry_text, "0.5555555555555556");
    }

    #[test]
    fn test_error_ignores_point_negate_operators() {
        let view = run("5/0=.~+*=");
        assert!(view.is_error);
        assert_eq!(view.entry_text, "Division by zero");
        assert_eq!(view.pending_text, "5 / ");
    }

    #[test]
    fn test_backspace_and_clear_entry_dismiss_error() {
        let view = run("5/0=<");
        assert!(!view.is_error);
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "5 / ");

        let view = run("5/0=e");
        assert!(!view.is_error);
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "5 / ");
    }

    #[test]
    fn test_clear_all() {
        let view = run("5/0=c");
        assert!(!view.is_error);
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "");

        let view = run("12+34c");
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "");
    }

    #[test]
    fn test_clear_entry_keeps_pending() {
        let view = run("12+34e");
        assert_eq!(view.entry_text, "0");
        assert_eq!(view.pending_text, "12 + ");
        assert_eq!(run("12+34e5=").entry_text, "17");
    }

    #[test]
    fn test_running_total_stops_on_error() {
        let mut engine = Engine::new();
        let view = press(&mut engine, "5/0/");
        assert!(view.is_error);
        assert_eq!(view.pending_text, "5 / ");
        assert!(!engine.pending().unwrap().is_final());
    }

    #[test]
    fn test_entry_length_bound() {
        let config = CalcConfig {
            max_entry_len: 3,
            ..CalcConfig::default()
        };
        let mut engine = Engine::with_config(&config);
        assert_eq!(press(&mut engine, "12345").entry_text, "123");
        assert_eq!(press(&mut engine, "<9").entry_text, "129");

        // the bare operation is unbounded
        engine.digit(Digit::new(7).unwrap());
        assert_eq!(engine.entry().text(), "1297");
    }

    #[test]
    fn test_digit_after_long_result_clears_equation() {
        let mut engine = Engine::with_config(&CalcConfig::default());
        let view = press(&mut engine, "0.1+0.2=");
        assert_eq!(view.pending_text, "0.1 + 0.2 =");

        // the result already fills the entry, so only the equation goes
        let view = press(&mut engine, "5");
        assert_eq!(view.pending_text, "");
        assert_eq!(view.entry_text, "0.30000000000000004");
        assert!(engine.pending().is_none());

        let view = press(&mut engine, "<<<<5");
        assert_eq!(view.entry_text, "0.30000000000005");
    }

    #[test]
    fn test_equals_failure_shows_error() {
        let mut engine = Engine::new();
        let view = press(&mut engine, "8/0=");
        assert!(view.is_error);
        assert_eq!(view.entry_text, "Division by zero");
    }
}
