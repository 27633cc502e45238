//! Keypad calculator state machine
//!
//! Models an on-screen calculator widget's arithmetic core: a string display
//! buffer, one stashed operand, one pending binary operator, and a flag that
//! marks the start of a fresh number. Operator presses evaluate immediately
//! against the running accumulator, left to right — there is no operator
//! precedence, and division by zero flows IEEE-754 non-finite values straight
//! into the display.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.enter_digit(5);
//! calc.apply_operator(Operator::Add);
//! calc.enter_digit(3);
//! calc.press_equals();
//! assert_eq!(calc.display(), "8");
//!
//! // Or drive whole key sequences through a script:
//! let mut driver = KeypadDriver::new();
//! driver.run_script("4+2×3=").unwrap();
//! assert_eq!(driver.display(), "18"); // left to right: (4 + 2) × 3
//! assert_eq!(driver.tape().render_all(), "4 + 2 = 6\n6 × 3 = 18");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::machine::Calculator;
    pub use crate::core::operator::Operator;
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::driver::{parse_script, KeypadDriver, ScriptError};
    pub use crate::keypad::{Key, Keypad, KeypadButton};
}
