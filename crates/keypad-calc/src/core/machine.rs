//! Calculator state machine
//!
//! Four fields drive the whole widget: the display buffer, the stashed left
//! operand, the pending operator, and the waiting-for-operand flag. The
//! display stays a string until an operator or equals press parses it; this
//! is what lets in-progress fragments like `"0."` exist on screen.

use crate::core::operator::Operator;
use crate::keypad::Key;

/// Keypad calculator state machine
///
/// Created in the `("0", None, None, false)` state and reset to it by
/// [`Calculator::clear`]. Operator presses evaluate immediately against the
/// running accumulator, left to right; there is no operator precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// The number currently shown, also the in-progress operand buffer
    display: String,
    /// Left operand of a pending operation
    accumulator: Option<f64>,
    /// Operator awaiting its right operand
    pending: Option<Operator>,
    /// Next digit starts a fresh number instead of appending
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            waiting_for_operand: false,
        }
    }

    /// Returns the current display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the stashed left operand, if an operation is pending
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Returns the operator awaiting its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Returns true if the next digit starts a fresh number
    #[must_use]
    pub fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Enters a digit (0-9). Out-of-range values are ignored.
    ///
    /// A lone `"0"` is replaced rather than appended to; any other display
    /// content grows by string concatenation.
    pub fn enter_digit(&mut self, d: u8) {
        let Some(digit) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        if self.waiting_for_operand {
            self.display.clear();
            self.display.push(digit);
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display.clear();
            self.display.push(digit);
        } else {
            self.display.push(digit);
        }
    }

    /// Enters the decimal point.
    ///
    /// Starts a fresh `"0."` when waiting for an operand; otherwise appends
    /// at most one `.` to the display.
    pub fn enter_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display.clear();
            self.display.push_str("0.");
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Resets all four fields to the initial state
    pub fn clear(&mut self) {
        self.display.clear();
        self.display.push('0');
        self.accumulator = None;
        self.pending = None;
        self.waiting_for_operand = false;
    }

    /// Selects a binary operator.
    ///
    /// The first operator press after a clear only stashes the displayed
    /// operand; a press with an operation already pending commits
    /// `pending(accumulator, display)` into both the display and the
    /// accumulator before arming the new operator. Returns the value
    /// committed by this press, or `None` for a bare stash.
    pub fn apply_operator(&mut self, op: Operator) -> Option<f64> {
        let input = self.parse_display();
        let committed = match (self.accumulator, self.pending) {
            (None, _) => {
                self.accumulator = Some(input);
                None
            }
            (Some(acc), Some(pending)) => {
                let value = pending.evaluate(acc, input);
                self.display = value.to_string();
                self.accumulator = Some(value);
                Some(value)
            }
            (Some(_), None) => None,
        };
        self.waiting_for_operand = true;
        self.pending = Some(op);
        committed
    }

    /// Commits the pending operation.
    ///
    /// Acts only when both an accumulator and a pending operator are
    /// present; otherwise a silent no-op. On commit the accumulator and
    /// pending operator are cleared and the result is returned.
    pub fn press_equals(&mut self) -> Option<f64> {
        let (Some(acc), Some(pending)) = (self.accumulator, self.pending) else {
            return None;
        };
        let input = self.parse_display();
        let value = pending.evaluate(acc, input);
        self.display = value.to_string();
        self.accumulator = None;
        self.pending = None;
        self.waiting_for_operand = true;
        Some(value)
    }

    /// Dispatches a single key event to the matching operation.
    ///
    /// Returns the value committed by the press, if any.
    pub fn press(&mut self, key: Key) -> Option<f64> {
        match key {
            Key::Digit(d) => {
                self.enter_digit(d);
                None
            }
            Key::Decimal => {
                self.enter_decimal();
                None
            }
            Key::Clear => {
                self.clear();
                None
            }
            Key::Op(op) => self.apply_operator(op),
            Key::Equals => self.press_equals(),
        }
    }

    // The entry guards keep the buffer numeric, so the parse only falls
    // back for displays set through no key at all.
    fn parse_display(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}
