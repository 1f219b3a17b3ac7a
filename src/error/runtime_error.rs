#[derive(Debug)]
/// Represents all errors that can occur while applying an operator.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the division operator.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
