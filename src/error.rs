/// Tokenizer errors.
///
/// Defines all error types that can occur while scanning source text into
/// tokens, such as unrecognizable characters, a function name without its
/// call parenthesis, or a misplaced factorial. Each error carries the byte
/// offset of the offending position within the expression.
pub mod tokenizer_error;

/// Parsing errors.
///
/// Defines the error types raised while translating an infix token sequence
/// to postfix form, which all amount to mismatched parentheses.
pub mod parse_error;

/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence: stack underflow and overflow, operand type mismatches,
/// uninitialized variables, assignment to something that is not a variable,
/// and integer division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tokenizer_error::TokenizerError;
