use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// Additive operators bind with strength 1, multiplicative operators with
    /// strength 2. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::evaluator::operator::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Sub.precedence(), BinaryOperator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Maps a token to its corresponding binary operator.
    ///
    /// Returns `Some(BinaryOperator)` when the token represents one of the
    /// four arithmetic operators, and `None` for all other tokens.
    ///
    /// # Parameters
    /// - `token`: Token to convert.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::{evaluator::operator::BinaryOperator, lexer::Token};
    ///
    /// assert_eq!(BinaryOperator::from_token(&Token::Plus),
    ///            Some(BinaryOperator::Add));
    /// assert_eq!(BinaryOperator::from_token(&Token::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division is checked for a zero divisor; every other combination of
    /// finite operands succeeds.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::evaluator::operator::BinaryOperator;
    ///
    /// let result = BinaryOperator::Sub.apply(10.0, 4.0, 0).unwrap();
    /// assert_eq!(result, 6.0);
    ///
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0, 0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(left / right)
            },
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
