//! # expreval
//!
//! expreval is an expression evaluator written in Rust. It scans an infix
//! arithmetic/logical expression into tokens, rewrites them to postfix form
//! with the shunting-yard algorithm, and executes the postfix sequence on an
//! operand stack, with arbitrary-precision integers, reals, booleans,
//! assignable variables and a set of built-in math functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides one error type per pipeline stage.
///
/// Tokenizer errors carry the byte offset of the offending position; parser
/// and runtime errors carry their canonical message. All three implement
/// [`std::error::Error`], so a driver can surface any stage's failure
/// through one `Box<dyn Error>`.
pub mod error;

/// Hosts the pipeline: token model, tokenizer, parser, evaluator and the
/// runtime value type.
pub mod interpreter;

// Re-export the commonly used types and the three pipeline operations.
pub use crate::{
    error::{ParseError, RuntimeError, TokenizerError},
    interpreter::{
        evaluator::core::{evaluate, operand_value},
        parser::parse,
        token::{Token, TokenList, Variable},
        tokenizer::Tokenizer,
        value::Value,
    },
};

/// Evaluates a script and returns the value of its last expression.
///
/// Each non-blank line runs through the full pipeline — tokenize, parse,
/// evaluate — against one shared [`Tokenizer`], so variables assigned on an
/// earlier line are visible to later ones. With `auto_print` set, the final
/// value is written to standard output.
///
/// # Errors
/// Returns the first tokenizer, parser or runtime error encountered;
/// evaluation stops at the failing line. Variables registered before the
/// failure stay registered.
///
/// # Examples
/// ```
/// use expreval::{Value, get_result};
///
/// let result = get_result("x = 5\nx + 1", false).unwrap();
/// assert_eq!(result, Some(Value::Integer(6.into())));
///
/// // A lone uninitialized variable is an error.
/// assert!(get_result("y + 1", false).is_err());
/// ```
pub fn get_result(source: &str,
                  auto_print: bool)
                  -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut tokenizer = Tokenizer::new();
    let mut result = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let tokens = tokenizer.tokenize(line)?;
        let postfix = parse(&tokens)?;
        let operand = evaluate(&postfix)?;
        result = Some(operand_value(&operand)?);
    }

    if auto_print && let Some(value) = &result {
        println!("{value}");
    }

    Ok(result)
}
