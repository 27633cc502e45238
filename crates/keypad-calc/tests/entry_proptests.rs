//! Property-based tests over key sequences
//!
//! Pins the entry invariants: digit presses concatenate with the single
//! leading zero elided, the display never holds two decimal points, clear
//! restores the initial state from anywhere, and the display always stays
//! parseable numeric text.

use keypad_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any binary operator except equals
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Generate any key event
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        digit_strategy().prop_map(Key::Digit),
        Just(Key::Decimal),
        operator_strategy().prop_map(Key::Op),
        Just(Key::Equals),
        Just(Key::Clear),
    ]
}

/// Generate an entry-only key (digit or decimal)
fn entry_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![digit_strategy().prop_map(Key::Digit), Just(Key::Decimal)]
}

/// Reference model of digit entry: literal concatenation with the single
/// leading `"0"` elided
fn expected_digit_display(ds: &[u8]) -> String {
    let mut s = String::from("0");
    for &d in ds {
        let ch = char::from_digit(u32::from(d), 10).unwrap();
        if s == "0" {
            s = ch.to_string();
        } else {
            s.push(ch);
        }
    }
    s
}

// ===== Entry properties =====

proptest! {
    /// Digit sequences from a fresh calculator concatenate literally
    #[test]
    fn prop_digit_entry_concatenates(ds in prop::collection::vec(digit_strategy(), 1..12)) {
        let mut calc = Calculator::new();
        for &d in &ds {
            calc.enter_digit(d);
        }
        prop_assert_eq!(calc.display(), expected_digit_display(&ds));
    }

    /// The display never holds more than one decimal point
    #[test]
    fn prop_at_most_one_decimal_point(keys in prop::collection::vec(entry_key_strategy(), 0..20)) {
        let mut calc = Calculator::new();
        for &key in &keys {
            calc.press(key);
            let dots = calc.display().matches('.').count();
            prop_assert!(dots <= 1, "display {:?} has {} dots", calc.display(), dots);
        }
    }

    /// Clear restores the initial state from any reachable state
    #[test]
    fn prop_clear_always_resets(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut calc = Calculator::new();
        for &key in &keys {
            calc.press(key);
        }
        calc.clear();
        prop_assert_eq!(calc.display(), "0");
        prop_assert_eq!(calc.accumulator(), None);
        prop_assert_eq!(calc.pending_operator(), None);
        prop_assert!(!calc.waiting_for_operand());
    }

    /// The display is always parseable numeric text, including the partial
    /// `"5."` form and the non-finite spellings a zero division produces
    #[test]
    fn prop_display_always_parses(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut calc = Calculator::new();
        for &key in &keys {
            calc.press(key);
            prop_assert!(
                calc.display().parse::<f64>().is_ok(),
                "display {:?} stopped parsing",
                calc.display()
            );
        }
    }

    /// A digit pressed right after an operator starts a fresh number
    #[test]
    fn prop_digit_after_operator_starts_fresh(
        ds in prop::collection::vec(digit_strategy(), 1..6),
        op in operator_strategy(),
        d in digit_strategy(),
    ) {
        let mut calc = Calculator::new();
        for &x in &ds {
            calc.enter_digit(x);
        }
        calc.apply_operator(op);
        calc.enter_digit(d);
        prop_assert_eq!(calc.display(), d.to_string());
    }

    /// Equals with nothing pending never changes the display
    #[test]
    fn prop_equals_without_pending_is_noop(ds in prop::collection::vec(digit_strategy(), 1..8)) {
        let mut calc = Calculator::new();
        for &d in &ds {
            calc.enter_digit(d);
        }
        let before = calc.display().to_string();
        calc.press_equals();
        prop_assert_eq!(calc.display(), before);
    }

    /// Scripts built from keypad labels always parse back into key events
    #[test]
    fn prop_keypad_labels_script_round_trip(keys in prop::collection::vec(key_strategy(), 0..15)) {
        let script: String = keys.iter().map(Key::label).collect();
        let parsed = parse_script(&script).unwrap();
        prop_assert_eq!(parsed, keys);
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_five_plus_three_equals_eight() {
    let mut driver = KeypadDriver::new();
    driver.run_script("5+3=").unwrap();
    assert_eq!(driver.display(), "8");
}

#[test]
fn invariant_divide_by_zero_is_infinite() {
    let mut driver = KeypadDriver::new();
    driver.run_script("12÷0=").unwrap();
    let shown: f64 = driver.display().parse().unwrap();
    assert!(shown.is_infinite() && shown.is_sign_positive());
}

#[test]
fn invariant_chained_operators_have_no_precedence() {
    let mut driver = KeypadDriver::new();
    driver.run_script("4+2×3=").unwrap();
    assert_eq!(driver.display(), "18");
}

#[test]
fn invariant_equals_alone_is_noop() {
    let mut driver = KeypadDriver::new();
    driver.run_script("=").unwrap();
    assert_eq!(driver.display(), "0");
    assert!(driver.tape().is_empty());
}
