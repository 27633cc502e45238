//! Core calculator state machine and supporting types

pub mod machine;
pub mod operator;
pub mod tape;

pub use machine::Calculator;
pub use operator::Operator;
pub use tape::{Tape, TapeEntry};
