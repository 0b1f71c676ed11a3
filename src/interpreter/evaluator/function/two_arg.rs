use crate::interpreter::{
    evaluator::core::{EvalResult, operand_value},
    token::Token,
};

/// Evaluates a two-argument function call.
///
/// All four built-ins coerce both operands to reals and produce a real, so
/// `max(1, 2)` is `2.0`, not `2`. The first popped operand is the right
/// argument, mirroring how the call was written.
pub fn eval_two_arg(function: &Token, lhs: &Token, rhs: &Token) -> EvalResult<Token> {
    let left = operand_value(lhs)?.as_real()?;
    let right = operand_value(rhs)?.as_real()?;

    let result = match function {
        Token::Arctan2 => left.atan2(right),
        Token::Max => left.max(right),
        Token::Min => left.min(right),
        Token::Pow => left.powf(right),
        _ => unreachable!("eval_two_arg called with a non-function token"),
    };

    Ok(Token::Real(result))
}
