use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Evaluates a scalar arithmetic operation.
///
/// Mixed integer/real operands are promoted to reals; two integers stay on
/// the integer branch, where division truncates toward zero. Booleans have
/// no arithmetic and are unsupported operands. Real division by zero keeps
/// host float semantics (infinities, NaN); integer division by zero is a
/// defined error.
///
/// The operator must be one of `Addition`, `Subtraction`, `Multiplication`
/// or `Division`; other operators are not processed here.
pub fn eval_scalar_op(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    if left.is_real() || right.is_real() {
        let (left, right) = left.promote_to_real(&right)?;
        let left = left.as_real()?;
        let right = right.as_real()?;

        return Ok(Value::Real(match operator {
                                  Token::Addition => left + right,
                                  Token::Subtraction => left - right,
                                  Token::Multiplication => left * right,
                                  Token::Division => left / right,
                                  _ => unreachable!(),
                              }));
    }

    match (&left, &right) {
        (Value::Integer(a), Value::Integer(b)) => match operator {
            Token::Addition => Ok(Value::Integer(a + b)),
            Token::Subtraction => Ok(Value::Integer(a - b)),
            Token::Multiplication => Ok(Value::Integer(a * b)),
            Token::Division => {
                if b.is_zero() {
                    Err(RuntimeError::DivisionByZero)
                } else {
                    Ok(Value::Integer(a / b))
                }
            },
            _ => unreachable!(),
        },
        _ => Err(RuntimeError::UnsupportedOperand),
    }
}

/// Evaluates the modulus, which exists on the integer branch only.
///
/// The remainder takes the sign of the dividend, as the underlying
/// big-integer division does.
pub fn eval_modulus(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            if b.is_zero() {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(a % b))
            }
        },
        _ => Err(RuntimeError::UnsupportedOperand),
    }
}
