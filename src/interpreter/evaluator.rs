/// The evaluation loop and its operand stack.
///
/// Walks a postfix sequence, pushing operands and applying operators and
/// functions, until exactly one operand remains. Also home to the helpers
/// that dereference operand tokens into [`crate::interpreter::value::Value`]s
/// and materialize values back into tokens.
pub mod core;

/// Prefix operators (`+`, `-`, `not`) and the postfix factorial.
pub mod unary;

/// Binary operators, split by family: dispatch, scalar arithmetic,
/// comparisons, boolean logic and exponentiation.
pub mod binary;

/// Built-in functions, split by arity.
pub mod function;
