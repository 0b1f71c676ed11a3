use num_traits::ToPrimitive;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Tests two values for equality by value.
///
/// Integers and reals compare across branches after promotion, so `3` equals
/// `3.0`. Booleans compare with booleans; a boolean never equals a number.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Real(a), Value::Real(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Integer(i), Value::Real(r)) | (Value::Real(r), Value::Integer(i)) => {
            i.to_f64().is_some_and(|converted| converted == *r)
        },
        _ => false,
    }
}

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `Equality` and `Inequality` accept every branch combination and compare
/// by value. The relational operators promote mixed numbers and compare
/// within one branch; exact big-integer ordering is kept when both sides are
/// integers. Relational comparison of booleans is an unsupported operand.
pub fn eval_comparison(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    match operator {
        Token::Equality => Ok(Value::Bool(values_equal(&left, &right))),
        Token::Inequality => Ok(Value::Bool(!values_equal(&left, &right))),

        Token::Less | Token::LessEqual | Token::Greater | Token::GreaterEqual => {
            let (left, right) = left.promote_to_real(&right)?;

            match (&left, &right) {
                (Value::Integer(a), Value::Integer(b)) => {
                    Ok(Value::Bool(match operator {
                                       Token::Less => a < b,
                                       Token::LessEqual => a <= b,
                                       Token::Greater => a > b,
                                       Token::GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }))
                },
                (Value::Real(a), Value::Real(b)) => {
                    Ok(Value::Bool(match operator {
                                       Token::Less => a < b,
                                       Token::LessEqual => a <= b,
                                       Token::Greater => a > b,
                                       Token::GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }))
                },
                _ => Err(RuntimeError::UnsupportedOperand),
            }
        },

        _ => unreachable!("eval_comparison called with a non-comparison operator"),
    }
}
