use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, function, unary},
        token::Token,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence down to a single operand.
///
/// Operands are pushed onto a stack; every operator and function pops its
/// arguments and pushes its result. Assignment mutates the popped variable
/// handle in place, which is how `x = 5` becomes visible to later
/// expressions tokenized by the same tokenizer.
///
/// The returned operand may itself be a variable (an assignment evaluates to
/// its target); use [`operand_value`] to read the final value out of it.
///
/// # Errors
/// Returns a [`RuntimeError`] when the stack underflows, when more than one
/// operand remains at the end, or when an operation rejects its operands.
///
/// # Example
/// ```
/// use expreval::{Token, Tokenizer, evaluate, parse};
/// use num_bigint::BigInt;
///
/// let mut tokenizer = Tokenizer::new();
/// let postfix = parse(&tokenizer.tokenize("2 + 3 * 4").unwrap()).unwrap();
///
/// assert_eq!(evaluate(&postfix).unwrap(), Token::Integer(BigInt::from(14)));
/// ```
pub fn evaluate(rpn_expression: &[Token]) -> EvalResult<Token> {
    let mut stack: Vec<Token> = Vec::new();

    for token in rpn_expression {
        if token.is_operand() {
            stack.push(token.clone());
        } else if token.is_postfix_operator() {
            let operand = pop_operand(&mut stack)?;
            stack.push(unary::eval_factorial(&operand)?);
        } else if token.is_unary_operator() {
            let operand = pop_operand(&mut stack)?;
            stack.push(unary::eval_unary(token, operand)?);
        } else if token.is_binary_operator() {
            let rhs = pop_operand(&mut stack)?;
            let lhs = pop_operand(&mut stack)?;
            stack.push(binary::core::eval_binary(token, lhs, rhs)?);
        } else if token.is_one_arg_function() {
            let argument = pop_operand(&mut stack)?;
            stack.push(function::one_arg::eval_one_arg(token, &argument)?);
        } else if token.is_two_arg_function() {
            let rhs = pop_operand(&mut stack)?;
            let lhs = pop_operand(&mut stack)?;
            stack.push(function::two_arg::eval_two_arg(token, &lhs, &rhs)?);
        }
        // Pseudo-tokens never appear in a postfix sequence; ignore anything
        // unclassified rather than guessing at it.
    }

    let result = stack.pop().ok_or(RuntimeError::InsufficientOperands)?;
    if stack.is_empty() {
        Ok(result)
    } else {
        Err(RuntimeError::TooManyOperands)
    }
}

fn pop_operand(stack: &mut Vec<Token>) -> EvalResult<Token> {
    stack.pop().ok_or(RuntimeError::InsufficientOperands)
}

/// Reads the value out of an operand token.
///
/// Variables dereference to their stored value; an empty slot is the
/// "variable not initialized" error. Non-operand tokens are rejected.
///
/// # Errors
/// Returns [`RuntimeError::VariableNotInitialized`] for an unassigned
/// variable and [`RuntimeError::UnsupportedOperand`] for non-operand tokens.
pub fn operand_value(operand: &Token) -> EvalResult<Value> {
    if let Some(i) = operand.as_integer() {
        return Ok(Value::Integer(i.clone()));
    }
    if let Some(r) = operand.as_real() {
        return Ok(Value::Real(r));
    }
    if let Some(b) = operand.as_boolean() {
        return Ok(Value::Bool(b));
    }
    if let Some(variable) = operand.as_variable() {
        return variable.value().ok_or(RuntimeError::VariableNotInitialized);
    }
    Err(RuntimeError::UnsupportedOperand)
}

/// Materializes a value as a fresh operand token.
#[must_use]
pub fn make_operand(value: Value) -> Token {
    match value {
        Value::Integer(i) => Token::Integer(i),
        Value::Real(r) => Token::Real(r),
        Value::Bool(b) => Token::Boolean(b),
    }
}
