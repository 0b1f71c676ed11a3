/// The token module defines the shared token model.
///
/// Every stage of the pipeline speaks in [`token::Token`]s: the tokenizer
/// emits them, the parser reorders them, and the evaluator executes them.
/// The module also defines [`token::Variable`], the shared mutable operand
/// slot that makes `x = 5` in one expression visible to `x` in the next.
///
/// # Responsibilities
/// - Declares the closed set of token kinds and their payloads.
/// - Answers the classification questions (operand, operator arity,
///   function arity, pseudo-token) without exposing the representation.
/// - Provides payload extraction for operand tokens.
pub mod token;

/// The tokenizer module scans source text into tokens.
///
/// The tokenizer reads an expression left to right, greedily, skipping
/// whitespace, and resolves the context-sensitive characters (`+`, `-`, `!`)
/// from the category of the previously emitted token. It owns the keyword
/// dictionary and the variable registry.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with literal payloads.
/// - Interns keywords in three case spellings; registers variables on first
///   reference and hands out shared handles.
/// - Reports lexical errors with the byte offset of the offending position.
pub mod tokenizer;

/// The parser module rewrites infix token sequences into postfix form.
///
/// A pure shunting-yard translation driven by a precedence table and an
/// associativity predicate. Parentheses and argument separators are consumed
/// here; the output is ready for the stack evaluator.
///
/// # Responsibilities
/// - Honors precedence, associativity, parentheses and function calls.
/// - Validates parenthesis balance, reporting which side is missing.
pub mod parser;

/// The evaluator module executes postfix sequences.
///
/// A stack machine: operands push, operators and functions pop their
/// arguments and push one result, and exactly one operand must remain. The
/// evaluator mutates variables on assignment and dereferences them on use.
///
/// # Responsibilities
/// - Implements the arithmetic, relational, logical, unary and function
///   operations with integer-to-real promotion.
/// - Reports stack imbalance and operand type mismatches.
pub mod evaluator;

/// The value module defines the runtime operand branches.
///
/// [`value::Value`] carries the three branches every operation acts upon:
/// unbounded integers, double-precision reals and booleans. It provides the
/// conversions and the single promotion rule (integer to real) that the
/// evaluator relies on.
pub mod value;
