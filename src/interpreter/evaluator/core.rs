use crate::{
    error::{EvalError, ParseError},
    interpreter::evaluator::operator::BinaryOperator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A symbol waiting on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// A binary operator, tagged with its byte offset in the source.
    Operator(BinaryOperator, usize),
    /// An opening parenthesis acting as a reduction barrier, tagged with its
    /// byte offset.
    OpenParen(usize),
}

/// Stores the state of a single left-to-right reduction pass.
///
/// The evaluator holds the two stacks of the operator-precedence algorithm:
/// completed numeric values, and operators waiting for their right operand.
/// Operators deeper in the stack always bind at least as strongly as those
/// above them, except across an open parenthesis. Whenever an incoming
/// operator would break that ordering, the stack is reduced eagerly, so no
/// token list or syntax tree is ever built.
///
/// ## Usage
///
/// An `Evaluator` is created per expression and fed tokens in source order
/// via `push_number`, `push_operator`, `open_paren` and `close_paren`.
/// Calling `finish()` drains the remaining operators and yields the result.
pub struct Evaluator {
    /// Completed values awaiting combination, top = most recent.
    operands:        Vec<f64>,
    /// Operators and open parentheses not yet applied.
    operators:       Vec<Pending>,
    /// Whether the scan is positioned where an operand must appear: at the
    /// very start, or right after an operator or `(`. Decides whether a `-`
    /// is a unary sign or a subtraction.
    expects_operand: bool,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator for one expression, with empty stacks, expecting
    /// an operand first.
    #[must_use]
    pub const fn new() -> Self {
        Self { operands:        Vec::new(),
               operators:       Vec::new(),
               expects_operand: true, }
    }

    /// Whether the next token must be an operand for the expression to stay
    /// well formed. True at the start of the scan and after every operator
    /// or `(`.
    #[must_use]
    pub const fn expects_operand(&self) -> bool {
        self.expects_operand
    }

    /// Pushes a completed numeric value onto the operand stack.
    pub fn push_number(&mut self, value: f64) {
        self.operands.push(value);
        self.expects_operand = false;
    }

    /// Pushes an opening parenthesis onto the operator stack.
    ///
    /// The parenthesis shields the operators beneath it from reduction until
    /// the matching `)` arrives.
    ///
    /// # Parameters
    /// - `position`: Byte offset of the `(` in the source.
    pub fn open_paren(&mut self, position: usize) {
        self.operators.push(Pending::OpenParen(position));
        self.expects_operand = true;
    }

    /// Handles a closing parenthesis by reducing the enclosed group.
    ///
    /// Operators are popped and applied until the matching `(` surfaces,
    /// which is then discarded. The group's value is left on the operand
    /// stack, so the parenthesized expression behaves like a single operand.
    ///
    /// # Parameters
    /// - `position`: Byte offset of the `)` in the source.
    ///
    /// # Errors
    /// - `ParseError::MalformedOperatorSequence` if a reduction runs out of
    ///   operands.
    /// - `ParseError::UnbalancedParentheses` if no `(` is on the stack.
    /// - `RuntimeError::DivisionByZero` from a reduction.
    pub fn close_paren(&mut self, position: usize) -> EvalResult<()> {
        while let Some(&Pending::Operator(op, op_position)) = self.operators.last() {
            self.operators.pop();
            self.reduce(op, op_position)?;
        }

        match self.operators.pop() {
            Some(Pending::OpenParen(_)) => {
                self.expects_operand = false;
                Ok(())
            },
            _ => Err(ParseError::UnbalancedParentheses { position }.into()),
        }
    }

    /// Handles an incoming binary operator.
    ///
    /// While the top of the operator stack binds at least as strongly as the
    /// incoming operator, the stack is reduced; the incoming operator is then
    /// pushed. The `>=` comparison makes operators of equal precedence reduce
    /// left to right, so `10 - 2 - 3` is `(10 - 2) - 3`.
    ///
    /// # Parameters
    /// - `op`: The incoming operator.
    /// - `position`: Byte offset of the operator in the source.
    ///
    /// # Errors
    /// - `ParseError::MalformedOperatorSequence` if a reduction runs out of
    ///   operands.
    /// - `RuntimeError::DivisionByZero` from a reduction.
    pub fn push_operator(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        loop {
            if let Some(&Pending::Operator(top, top_position)) = self.operators.last()
               && top.precedence() >= op.precedence()
            {
                self.operators.pop();
                self.reduce(top, top_position)?;
                continue;
            }
            break;
        }

        self.operators.push(Pending::Operator(op, position));
        self.expects_operand = true;
        Ok(())
    }

    /// Drains the remaining operators and returns the final value.
    ///
    /// After the drain the operand stack must hold exactly one value; any
    /// other count means the expression was empty or left operands with no
    /// operator to combine them.
    ///
    /// # Errors
    /// - `ParseError::MalformedOperatorSequence` if a reduction runs out of
    ///   operands.
    /// - `ParseError::UnbalancedParentheses` if a `(` is still on the stack.
    /// - `ParseError::EmptyOrIncompleteExpression` if the operand stack does
    ///   not end up with exactly one value.
    /// - `RuntimeError::DivisionByZero` from a reduction.
    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op, position) => self.reduce(op, position)?,
                Pending::OpenParen(position) => {
                    return Err(ParseError::UnbalancedParentheses { position }.into());
                },
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            values => {
                Err(ParseError::EmptyOrIncompleteExpression { values: values.len() }.into())
            },
        }
    }

    /// Applies one operator to the top two operands and pushes the result.
    ///
    /// The first pop yields the right operand, the second the left, so the
    /// operands combine in the order they were pushed.
    fn reduce(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        let right = self.operands.pop();
        let left = self.operands.pop();

        match (left, right) {
            (Some(left), Some(right)) => {
                self.operands.push(op.apply(left, right, position)?);
                Ok(())
            },
            _ => Err(ParseError::MalformedOperatorSequence { operator: op.to_string(),
                                                             position }.into()),
        }
    }
}
