use crate::error::ParseError;

/// Checks that every parenthesis in an expression has a partner.
///
/// The input is scanned once, before any tokenization. Offsets of opening
/// parentheses are stacked and popped as their closing partners arrive, so a
/// failure can point at the parenthesis that caused it: either a `)` with no
/// open group, or the outermost `(` that was never closed.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Errors
/// Returns `ParseError::UnbalancedParentheses` with the byte offset of the
/// offending parenthesis.
///
/// # Example
/// ```
/// use numeval::interpreter::validator::validate_parentheses;
///
/// assert!(validate_parentheses("(1 + 2) * 3").is_ok());
/// assert!(validate_parentheses("(1 + 2").is_err());
/// assert!(validate_parentheses("1 + 2)").is_err());
/// ```
pub fn validate_parentheses(expression: &str) -> Result<(), ParseError> {
    let mut open_positions = Vec::new();

    for (position, ch) in expression.char_indices() {
        match ch {
            '(' => open_positions.push(position),
            ')' => {
                if open_positions.pop().is_none() {
                    return Err(ParseError::UnbalancedParentheses { position });
                }
            },
            _ => {},
        }
    }

    match open_positions.first() {
        Some(&position) => Err(ParseError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}
