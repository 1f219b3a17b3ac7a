/// Parsing errors.
///
/// Defines all error types that can occur while validating and scanning an
/// expression. Parse errors include unbalanced parentheses, invalid
/// characters, operators with a missing operand, and expressions that do not
/// reduce to a single value.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while applying operators to
/// their operands, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any failure produced while evaluating an expression.
///
/// This is the error type returned by [`crate::evaluate`]. It distinguishes
/// failures detected while scanning the expression from failures raised while
/// applying an operator, and delegates its message to the wrapped error.
pub enum EvalError {
    /// The expression could not be scanned or reduced.
    Parse(ParseError),
    /// An operator could not be applied to its operands.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
