use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
