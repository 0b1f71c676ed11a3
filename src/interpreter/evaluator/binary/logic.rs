use crate::interpreter::{evaluator::core::EvalResult, token::Token, value::Value};

/// Evaluates a logical operation between two boolean values.
///
/// The operands are converted with `as_bool`, so any non-boolean input is an
/// unsupported operand; there is no promotion into the boolean branch. Both
/// operands are read before the operator is applied, so nothing
/// short-circuits.
pub fn eval_logic(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    let a = left.as_bool()?;
    let b = right.as_bool()?;

    Ok(Value::Bool(match operator {
                       Token::And => a && b,
                       Token::Or => a || b,
                       Token::Xor => a != b,
                       Token::Nand => !(a && b),
                       Token::Nor => !(a || b),
                       Token::Xnor => a == b,
                       _ => unreachable!("eval_logic called with a non-logical operator"),
                   }))
}
