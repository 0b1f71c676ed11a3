use num_traits::Signed;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, operand_value},
        token::Token,
        value::Value,
    },
};

/// Maps a function token to its real-valued implementation.
///
/// Covers every one-argument function that converts its operand to a real
/// and produces a real. `abs` and `result` are not in the table; they do not
/// fit the shape.
fn real_function(function: &Token) -> Option<fn(f64) -> f64> {
    Some(match function {
             Token::Sin => f64::sin,
             Token::Cos => f64::cos,
             Token::Tan => f64::tan,
             Token::Arcsin => f64::asin,
             Token::Arccos => f64::acos,
             Token::Arctan => f64::atan,
             Token::Sqrt => f64::sqrt,
             Token::Ln => f64::ln,
             Token::Lb => f64::log2,
             Token::Log => f64::log10,
             Token::Exp => f64::exp,
             Token::Floor => f64::floor,
             Token::Ceil => f64::ceil,
             _ => return None,
         })
}

/// Evaluates a one-argument function call.
///
/// `abs` preserves the operand branch, so an integer stays an integer of
/// unbounded magnitude. `result` has no runtime here and reports an
/// unsupported operand. Everything else goes through the real-valued table
/// and always yields a real, `floor` and `ceil` included.
pub fn eval_one_arg(function: &Token, argument: &Token) -> EvalResult<Token> {
    let value = operand_value(argument)?;

    match function {
        Token::Abs => match value {
            Value::Integer(i) => Ok(Token::Integer(i.abs())),
            Value::Real(r) => Ok(Token::Real(r.abs())),
            Value::Bool(_) => Err(RuntimeError::UnsupportedOperand),
        },
        Token::Result => Err(RuntimeError::UnsupportedOperand),
        _ => {
            let apply = real_function(function).ok_or(RuntimeError::UnsupportedOperand)?;
            Ok(Token::Real(apply(value.as_real()?)))
        },
    }
}
