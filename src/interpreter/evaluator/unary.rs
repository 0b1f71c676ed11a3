use num_bigint::BigInt;
use num_traits::{One, Signed};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, operand_value},
        token::Token,
        value::Value,
    },
};

/// Applies a prefix operator to an operand token.
///
/// - `Identity` validates the operand and passes it through unchanged, so
///   `+x` on an uninitialized variable still fails.
/// - `Negation` flips the sign, preserving the integer/real branch.
/// - `Not` negates a boolean; anything else is an unsupported operand.
pub fn eval_unary(operator: &Token, operand: Token) -> EvalResult<Token> {
    let value = operand_value(&operand)?;

    match operator {
        Token::Identity => Ok(operand),
        Token::Negation => match value {
            Value::Integer(i) => Ok(Token::Integer(-i)),
            Value::Real(r) => Ok(Token::Real(-r)),
            Value::Bool(_) => Err(RuntimeError::UnsupportedOperand),
        },
        Token::Not => match value {
            Value::Bool(b) => Ok(Token::Boolean(!b)),
            _ => Err(RuntimeError::UnsupportedOperand),
        },
        _ => unreachable!("eval_unary called with a non-unary operator"),
    }
}

/// Applies the postfix factorial.
///
/// Defined for non-negative integers only; the product is accumulated in an
/// unbounded integer, so `0!` is `1` and no input overflows.
pub fn eval_factorial(operand: &Token) -> EvalResult<Token> {
    let count = match operand_value(operand)? {
        Value::Integer(i) if !i.is_negative() => i,
        _ => return Err(RuntimeError::UnsupportedOperand),
    };

    let mut product = BigInt::one();
    let mut factor = BigInt::one();
    while factor <= count {
        product *= &factor;
        factor += 1;
    }

    Ok(Token::Integer(product))
}
