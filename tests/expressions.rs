use numeval::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "Expression '{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_error(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 3", 11.0);
    assert_value("2 * 3 + 3", 9.0);
    assert_value("1 + 6 / 2 - 4", 0.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("((1 + 2) * (3 + 4))", 21.0);
}

#[test]
fn equal_precedence_reduces_left_to_right() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("100 / 5 / 2", 10.0);
    assert_value("2 - 3 + 4", 3.0);
}

#[test]
fn decimal_literals() {
    assert_value("3.5 + 1.25", 4.75);
    assert_value(".5 + .25", 0.75);
    assert_value("2. * 3", 6.0);

    let value = evaluate("3.14 * (6.28 / 2)").unwrap();
    assert!((value - 9.8596).abs() < 1e-4);
}

#[test]
fn unary_negation() {
    assert_value("-5", -5.0);
    assert_value("-5 + (-2) * 3", -11.0);
    assert_value("2 * -3", -6.0);
    assert_value("(-1.5)", -1.5);
}

#[test]
fn negation_after_binary_minus() {
    assert_value("3 - -2", 5.0);
    assert_value("3 --2", 5.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("2+3", 5.0);
    assert_eq!(evaluate("2+3").unwrap(), evaluate(" 2 + 3 ").unwrap());
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("3.14 * (6.28 / 2) - -1").unwrap();
    let second = evaluate("3.14 * (6.28 / 2) - -1").unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn malformed_operator_sequences() {
    assert!(matches!(assert_error("2 + * 3"),
                     EvalError::Parse(ParseError::MalformedOperatorSequence { .. })));
    assert!(matches!(assert_error("2 +"),
                     EvalError::Parse(ParseError::MalformedOperatorSequence { .. })));
    assert!(matches!(assert_error("* 3"),
                     EvalError::Parse(ParseError::MalformedOperatorSequence { .. })));
}

#[test]
fn unary_sign_must_precede_a_number() {
    assert!(matches!(assert_error("--5"),
                     EvalError::Parse(ParseError::MalformedOperatorSequence { .. })));
    assert!(matches!(assert_error("2 + -(3)"),
                     EvalError::Parse(ParseError::MalformedOperatorSequence { .. })));
    assert!(matches!(assert_error("2 + -"),
                     EvalError::Parse(ParseError::MalformedOperatorSequence { .. })));
}

#[test]
fn division_by_zero() {
    assert!(matches!(assert_error("3 / 0"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_error("1 / (2 - 2)"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn unbalanced_parentheses_fail_before_arithmetic() {
    assert!(matches!(assert_error("(2 + 3 * 4"),
                     EvalError::Parse(ParseError::UnbalancedParentheses { .. })));
    assert!(matches!(assert_error("2 + 3)"),
                     EvalError::Parse(ParseError::UnbalancedParentheses { .. })));
    // The validator runs first, so the division by zero is never reached.
    assert!(matches!(assert_error(")3 / 0("),
                     EvalError::Parse(ParseError::UnbalancedParentheses { position: 0 })));
}

#[test]
fn invalid_characters() {
    assert!(matches!(assert_error("2 + a"),
                     EvalError::Parse(ParseError::InvalidCharacter { ch: 'a', .. })));
    assert!(matches!(assert_error("2 $ 3"),
                     EvalError::Parse(ParseError::InvalidCharacter { ch: '$', .. })));
    assert!(matches!(assert_error("."),
                     EvalError::Parse(ParseError::InvalidCharacter { ch: '.', .. })));
}

#[test]
fn empty_and_incomplete_expressions() {
    assert!(matches!(assert_error(""),
                     EvalError::Parse(ParseError::EmptyOrIncompleteExpression { values: 0 })));
    assert!(matches!(assert_error("   "),
                     EvalError::Parse(ParseError::EmptyOrIncompleteExpression { values: 0 })));
    assert!(matches!(assert_error("()"),
                     EvalError::Parse(ParseError::EmptyOrIncompleteExpression { values: 0 })));
    assert!(matches!(assert_error("2 3"),
                     EvalError::Parse(ParseError::EmptyOrIncompleteExpression { values: 2 })));
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(assert_error("3 / 0").to_string(),
               "Error at offset 2: Division by zero.");
    assert_eq!(assert_error("2 % 3").to_string(),
               "Error at offset 2: Invalid character: %.");
    assert_eq!(assert_error("(1 + 2").to_string(),
               "Error at offset 0: Unmatched parenthesis.");
}
