/// The evaluator module reduces the token stream to a numeric result.
///
/// The evaluator maintains the operand and operator stacks of the
/// operator-precedence algorithm and applies each operator the moment
/// precedence rules or a closing parenthesis allow it, without building a
/// token list or syntax tree.
///
/// # Responsibilities
/// - Maintains the scan state: operand stack, operator stack, and the
///   expects-operand flag that distinguishes unary from binary `-`.
/// - Reduces eagerly on operator arrival, closing parentheses, and at the
///   end of the scan.
/// - Reports reduction errors such as division by zero or an operator with
///   a missing operand.
pub mod evaluator;
/// The lexer module tokenizes an expression for the evaluator.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens: numeric literals, the four arithmetic operators, and
/// parentheses. Runs of spaces are skipped between tokens.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Parses numeric literals, including a leading or trailing decimal point.
/// - Surfaces invalid characters for error reporting.
pub mod lexer;
/// The validator module checks the expression's structure upfront.
///
/// Before any tokenization, the validator scans the raw input once and
/// verifies that every parenthesis has a partner, so the evaluator never
/// starts arithmetic on a structurally broken expression.
///
/// # Responsibilities
/// - Rejects a `)` that closes nothing and a `(` that is never closed.
/// - Reports the byte offset of the offending parenthesis.
pub mod validator;
