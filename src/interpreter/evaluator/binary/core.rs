use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison, logic, power, scalar},
            core::{EvalResult, make_operand, operand_value},
        },
        token::Token,
    },
};

/// Evaluates a binary operation between two operand tokens.
///
/// Assignment is handled first and on the raw tokens: the left-hand side
/// must be a variable *handle* and is never dereferenced, so assigning to a
/// fresh variable works. Every other operator dereferences both operands and
/// routes to its family handler: scalar arithmetic, modulus, power,
/// comparison or boolean logic.
pub fn eval_binary(operator: &Token, lhs: Token, rhs: Token) -> EvalResult<Token> {
    if matches!(operator, Token::Assignment) {
        return eval_assignment(lhs, &rhs);
    }

    let left = operand_value(&lhs)?;
    let right = operand_value(&rhs)?;

    let value = match operator {
        Token::Addition | Token::Subtraction | Token::Multiplication | Token::Division => {
            scalar::eval_scalar_op(operator, left, right)?
        },
        Token::Modulus => scalar::eval_modulus(&left, &right)?,
        Token::Power => power::eval_pow(left, right)?,
        Token::Equality
        | Token::Inequality
        | Token::Less
        | Token::LessEqual
        | Token::Greater
        | Token::GreaterEqual => comparison::eval_comparison(operator, left, right)?,
        Token::And | Token::Or | Token::Xor | Token::Nand | Token::Nor | Token::Xnor => {
            logic::eval_logic(operator, &left, &right)?
        },
        _ => unreachable!("eval_binary called with a non-binary operator"),
    };

    Ok(make_operand(value))
}

/// Stores the right-hand value into the target variable and yields the
/// variable itself, so assignments chain right to left (`x = y = 5`).
///
/// The stored value is materialized from the right-hand side's *value*:
/// assigning one variable to another copies the value, never the handle.
fn eval_assignment(target: Token, rhs: &Token) -> EvalResult<Token> {
    match &target {
        Token::Variable(variable) => {
            variable.set(operand_value(rhs)?);
            Ok(target)
        },
        _ => Err(RuntimeError::AssignmentToNonVariable),
    }
}
