/// Core reduction logic and scan state.
///
/// Contains the two-stack reduction engine that consumes tokens in source
/// order and eagerly collapses them into a single value.
pub mod core;

/// Binary operator definitions.
///
/// Defines the arithmetic operators, their precedence, their mapping from
/// tokens, and how they are applied to operands.
pub mod operator;
