//! Keypad input boundary
//!
//! The widget's entire input surface is the set of discrete key events
//! modeled here, plus the button grid that produces them. Rendering and
//! event wiring live outside this crate; the grid is data only.

use crate::core::operator::Operator;
use serde::{Deserialize, Serialize};

/// A single discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// A binary operator key
    Op(Operator),
    /// The equals key
    Equals,
    /// The clear key
    Clear,
}

impl Key {
    /// Maps a typed character to a key event.
    ///
    /// Accepts digits, `.`, the operator keycap glyphs and their ASCII
    /// aliases, `=`, and `C`/`c` for clear. Anything else maps to `None`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => Operator::from_symbol(ch).map(Self::Op),
        }
    }

    /// Returns the keycap label for this key
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Op(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }
}

/// One button of the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The keycap label
    pub label: char,
    /// The event this button produces
    pub key: Key,
}

impl KeypadButton {
    fn new(key: Key) -> Self {
        Self {
            label: key.label(),
            key,
        }
    }
}

/// The widget's button grid, one button per distinct keycap
///
/// ```text
/// [  C  ] [ ÷ ] [ × ]
/// [7] [8] [9]   [ - ]
/// [4] [5] [6]   [ + ]
/// [1] [2] [3]   [ = ]
/// [  0  ] [ . ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ÷ ×
            KeypadButton::new(Key::Clear),
            KeypadButton::new(Key::Op(Operator::Divide)),
            KeypadButton::new(Key::Op(Operator::Multiply)),
            // Row 2: 7 8 9 -
            KeypadButton::new(Key::Digit(7)),
            KeypadButton::new(Key::Digit(8)),
            KeypadButton::new(Key::Digit(9)),
            KeypadButton::new(Key::Op(Operator::Subtract)),
            // Row 3: 4 5 6 +
            KeypadButton::new(Key::Digit(4)),
            KeypadButton::new(Key::Digit(5)),
            KeypadButton::new(Key::Digit(6)),
            KeypadButton::new(Key::Op(Operator::Add)),
            // Row 4: 1 2 3 =
            KeypadButton::new(Key::Digit(1)),
            KeypadButton::new(Key::Digit(2)),
            KeypadButton::new(Key::Digit(3)),
            KeypadButton::new(Key::Equals),
            // Row 5: 0 .
            KeypadButton::new(Key::Digit(0)),
            KeypadButton::new(Key::Decimal),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Iterates the buttons in visual order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Finds a button by its keycap label
    #[must_use]
    pub fn find(&self, label: char) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Returns the key event for a keycap label
    #[must_use]
    pub fn key_for(&self, label: char) -> Option<Key> {
        self.find(label).map(|b| b.key)
    }
}
