//! Binary operators of the keypad
//!
//! The operator set is exactly the five keycaps the widget exposes. `Equals`
//! is a member of the set because a pending `=` evaluates as identity on the
//! right operand.

use serde::{Deserialize, Serialize};

/// A binary operator selected from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Equals (=), identity on the right operand
    Equals,
}

impl Operator {
    /// Returns the keycap glyph for this operator
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Equals => '=',
        }
    }

    /// Parses an operator from a keycap glyph or its ASCII alias
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division carries no zero guard: `n ÷ 0` follows IEEE-754 into
    /// inf/NaN, which flows into the display unchanged.
    #[must_use]
    pub fn evaluate(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Equals => b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
