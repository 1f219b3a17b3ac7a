//! # numeval
//!
//! numeval is an arithmetic expression evaluator written in Rust.
//! It scans an expression with the four basic operators, parentheses,
//! decimal numbers, and unary negation, and reduces it to a numeric result
//! in a single left-to-right pass.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::{core::Evaluator, operator::BinaryOperator},
        lexer::Token,
        validator::validate_parentheses,
    },
};

/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors that can be raised while validating,
/// lexing, or reducing an expression. It standardizes error reporting and
/// carries detailed information about failures, including error kinds,
/// descriptions, and source offsets for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (validator, lexer, reducer).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together parenthesis validation, lexing, and the
/// two-stack reduction engine to provide a complete evaluator for arithmetic
/// expressions.
///
/// # Responsibilities
/// - Coordinates all core components: validator, lexer, and evaluator.
/// - Provides the building blocks behind [`evaluate`].
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the numeric value of an arithmetic expression.
///
/// The expression may contain decimal numbers, `+`, `-`, `*`, `/`,
/// parentheses, and unary negation; spaces between tokens are ignored.
/// Parenthesis balance is validated before any arithmetic, then the input is
/// tokenized and reduced in one forward pass. Evaluation is a pure function
/// of the input: no state persists between calls.
///
/// # Errors
/// Returns an error if the expression contains unbalanced parentheses or an
/// invalid character, if an operator is missing an operand, if a division by
/// zero is attempted, or if the expression does not reduce to exactly one
/// value.
///
/// # Examples
/// ```
/// use numeval::evaluate;
///
/// // Parentheses override operator precedence.
/// let result = evaluate("(2 + 3) * 4").unwrap();
/// assert_eq!(result, 20.0);
///
/// // An operator with a missing operand is reported, not computed.
/// assert!(evaluate("2 + * 3").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    validate_parentheses(expression)?;

    let mut evaluator = Evaluator::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;

        let Ok(token) = token else {
            return Err(invalid_character(&lexer));
        };

        match token {
            Token::Number(value) => evaluator.push_number(value),

            // A `-` where an operand is expected signs the number that
            // follows it instead of subtracting.
            Token::Minus if evaluator.expects_operand() => match lexer.next() {
                Some(Ok(Token::Number(value))) => evaluator.push_number(-value),
                Some(Err(())) => return Err(invalid_character(&lexer)),
                _ => {
                    return Err(ParseError::MalformedOperatorSequence {
                        operator: BinaryOperator::Sub.to_string(),
                        position,
                    }
                    .into());
                },
            },

            Token::LParen => evaluator.open_paren(position),
            Token::RParen => evaluator.close_paren(position)?,

            token => match BinaryOperator::from_token(&token) {
                Some(op) => evaluator.push_operator(op, position)?,
                None => unreachable!(),
            },
        }
    }

    evaluator.finish()
}

/// Builds an `InvalidCharacter` error from the lexer's current slice.
fn invalid_character(lexer: &logos::Lexer<Token>) -> EvalError {
    ParseError::InvalidCharacter { ch:       lexer.slice().chars().next().unwrap_or_default(),
                                   position: lexer.span().start, }.into()
}
