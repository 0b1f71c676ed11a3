use num_traits::{Pow, Signed, ToPrimitive};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an exponentiation.
///
/// Two integers stay on the integer branch with an unbounded result; a
/// negative integer exponent is rejected rather than silently collapsing to
/// one. Everything else is promoted to reals and computed with `powf`, so a
/// real base accepts any exponent sign.
pub fn eval_pow(base: Value, exponent: Value) -> EvalResult<Value> {
    match (&base, &exponent) {
        (Value::Integer(b), Value::Integer(e)) => {
            if e.is_negative() {
                return Err(RuntimeError::UnsupportedOperand);
            }
            let exponent = e.to_u64().ok_or(RuntimeError::UnsupportedOperand)?;
            Ok(Value::Integer(Pow::pow(b, exponent)))
        },
        _ => {
            let (base, exponent) = base.promote_to_real(&exponent)?;
            Ok(Value::Real(base.as_real()?.powf(exponent.as_real()?)))
        },
    }
}
