//! Scripted keypad driver
//!
//! Drives the state machine through its public key boundary, one event per
//! script character, and tapes every committed evaluation. This is how the
//! tests exercise whole button sequences without any rendering layer.

use crate::core::machine::Calculator;
use crate::core::tape::Tape;
use crate::keypad::Key;
use thiserror::Error;

/// Errors from parsing a key script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A character in the script maps to no keypad key
    #[error("unknown key {ch:?} at script position {index}")]
    UnknownKey {
        /// The offending character
        ch: char,
        /// Character position in the script
        index: usize,
    },
}

/// Parses a key script, one key per non-whitespace character.
///
/// `"12÷0="` becomes digit 1, digit 2, divide, digit 0, equals. Whitespace
/// is skipped so scripts can be spaced for readability.
pub fn parse_script(script: &str) -> Result<Vec<Key>, ScriptError> {
    let mut keys = Vec::new();
    for (index, ch) in script.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        match Key::from_char(ch) {
            Some(key) => keys.push(key),
            None => return Err(ScriptError::UnknownKey { ch, index }),
        }
    }
    Ok(keys)
}

/// Drives a [`Calculator`] with key events and tapes committed evaluations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeypadDriver {
    machine: Calculator,
    tape: Tape,
}

impl KeypadDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            machine: Calculator::new(),
            tape: Tape::new(),
        }
    }

    /// Creates a driver with a custom tape length
    #[must_use]
    pub fn with_tape_capacity(max_entries: usize) -> Self {
        Self {
            machine: Calculator::new(),
            tape: Tape::with_capacity(max_entries),
        }
    }

    /// Returns the driven calculator
    #[must_use]
    pub fn machine(&self) -> &Calculator {
        &self.machine
    }

    /// Returns the tape of committed evaluations
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the current display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.machine.display()
    }

    /// Presses a single key, taping the evaluation if the press commits one.
    ///
    /// Returns the committed value, if any.
    pub fn press(&mut self, key: Key) -> Option<f64> {
        // Operands are read before the press; a commit consumes them.
        let lhs = self.machine.accumulator();
        let op = self.machine.pending_operator();
        let rhs = self.machine.display().parse::<f64>().unwrap_or(0.0);

        let committed = self.machine.press(key);
        if let (Some(result), Some(lhs), Some(op)) = (committed, lhs, op) {
            self.tape.record(lhs, op, rhs, result);
        }
        committed
    }

    /// Parses a key script and presses every key in order
    pub fn run_script(&mut self, script: &str) -> Result<(), ScriptError> {
        for key in parse_script(script)? {
            self.press(key);
        }
        Ok(())
    }

    /// Clears the calculator and the tape
    pub fn reset(&mut self) {
        self.machine.clear();
        self.tape.clear();
    }
}
