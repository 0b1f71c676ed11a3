use expreval::{
    ParseError, RuntimeError, Tokenizer, TokenizerError, Value, evaluate, get_result,
    operand_value, parse,
};
use num_bigint::BigInt;

fn eval(source: &str) -> Value {
    get_result(source, false).unwrap_or_else(|e| panic!("Script failed: {e}"))
                             .expect("Script produced no value")
}

fn integer(value: i64) -> Value {
    Value::Integer(BigInt::from(value))
}

fn runtime_err(source: &str) -> RuntimeError {
    let error = get_result(source, false).expect_err("Script succeeded but was expected to fail");
    *error.downcast::<RuntimeError>().expect("Expected a runtime error")
}

fn tokenizer_err(source: &str) -> TokenizerError {
    let error = get_result(source, false).expect_err("Script succeeded but was expected to fail");
    *error.downcast::<TokenizerError>().expect("Expected a tokenizer error")
}

fn parse_err(source: &str) -> ParseError {
    let error = get_result(source, false).expect_err("Script succeeded but was expected to fail");
    *error.downcast::<ParseError>().expect("Expected a parse error")
}

fn assert_real_close(value: &Value, expected: f64) {
    match value {
        Value::Real(r) => {
            assert!((r - expected).abs() < 1e-9, "expected {expected}, found {r}");
        },
        other => panic!("expected a real, found {other:?}"),
    }
}

#[test]
fn literal_values_evaluate_to_themselves() {
    assert_eq!(eval("42"), integer(42));
    assert_eq!(eval("3.14"), Value::Real(3.14));
    assert_eq!(eval("0b1011"), integer(11));
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
    assert_eq!(eval("pi"), Value::Real(std::f64::consts::PI));
    assert_eq!(eval("e"), Value::Real(std::f64::consts::E));
}

#[test]
fn integers_have_no_upper_bound() {
    let expected = "123456789012345678901234567890".parse::<BigInt>().unwrap();
    assert_eq!(eval("123456789012345678901234567890"), Value::Integer(expected));

    let two_pow_100 = "1267650600228229401496703205376".parse::<BigInt>().unwrap();
    assert_eq!(eval("2 ** 100"), Value::Integer(two_pow_100));

    let thirty_factorial = "265252859812191058636308480000000".parse::<BigInt>().unwrap();
    assert_eq!(eval("30!"), Value::Integer(thirty_factorial));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2 + 3 * 4"), integer(14));
    assert_eq!(eval("2 * 3 + 4"), integer(10));
}

#[test]
fn power_and_assignment_are_right_associative() {
    assert_eq!(eval("2 ** 3 ** 2"), integer(512));
    assert_eq!(eval("x = y = 5\nx + y"), integer(10));
}

#[test]
fn left_associative_operators_group_leftwards() {
    assert_eq!(eval("10 - 3 - 2"), integer(5));
    assert_eq!(eval("24 / 4 / 2"), integer(3));
}

#[test]
fn factorial_binds_tighter_than_unary_minus() {
    assert_eq!(eval("-3!"), integer(-6));
    assert_eq!(eval("5!"), integer(120));
    assert_eq!(eval("0!"), integer(1));
}

#[test]
fn factorial_rejects_negatives_and_reals() {
    assert_eq!(runtime_err("(-3)!"), RuntimeError::UnsupportedOperand);
    assert_eq!(runtime_err("3.5!"), RuntimeError::UnsupportedOperand);
    assert_eq!(runtime_err("true!"), RuntimeError::UnsupportedOperand);
}

#[test]
fn unary_sign_preserves_the_operand_branch() {
    assert_eq!(eval("-3"), integer(-3));
    assert_eq!(eval("-3.5"), Value::Real(-3.5));
    assert_eq!(eval("+7"), integer(7));
    assert_eq!(eval("1 - -2"), integer(3));
}

#[test]
fn results_stay_on_their_branch() {
    assert!(eval("2 + 3").is_integer());
    assert!(eval("5!").is_integer());
    assert!(eval("2 + 3.0").is_real());
    assert!(eval("sqrt(4)").is_real());
    assert!(eval("2 < 3").is_bool());
    assert!(eval("not true").is_bool());
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_eq!(eval("(1 + 2) * 3.0"), Value::Real(9.0));
    assert_eq!(eval("1 + 0.5"), Value::Real(1.5));
    assert_eq!(eval("7.0 / 2"), Value::Real(3.5));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(eval("7 / 2"), integer(3));
    assert_eq!(eval("-7 / 2"), integer(-3));
}

#[test]
fn division_by_integer_zero_is_an_error() {
    assert_eq!(runtime_err("1 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_err("1 % 0"), RuntimeError::DivisionByZero);

    // Real division keeps host float semantics.
    match eval("1.0 / 0") {
        Value::Real(r) => assert!(r.is_infinite() && r.is_sign_positive()),
        other => panic!("expected a real, found {other:?}"),
    }
}

#[test]
fn modulus_is_integer_only() {
    assert_eq!(eval("7 % 3"), integer(1));
    assert_eq!(eval("7 mod 3"), integer(1));
    assert_eq!(eval("-7 % 3"), integer(-1));
    assert_eq!(runtime_err("7.5 % 2"), RuntimeError::UnsupportedOperand);
}

#[test]
fn integer_power_rejects_negative_exponents() {
    assert_eq!(eval("2 ** 10"), integer(1024));
    assert_eq!(eval("2 ** 0"), integer(1));
    assert_eq!(runtime_err("2 ** (-1)"), RuntimeError::UnsupportedOperand);
    assert_eq!(eval("2.0 ** (-1)"), Value::Real(0.5));
}

#[test]
fn two_arg_functions_always_produce_reals() {
    assert_eq!(eval("max(1, 2) + min(3, 4)"), Value::Real(5.0));
    assert_real_close(&eval("pow(2, 10)"), 1024.0);
    assert_eq!(eval("arctan2(0, 1)"), Value::Real(0.0));
}

#[test]
fn one_arg_functions_produce_reals_except_abs() {
    assert_eq!(eval("sin(0)"), Value::Real(0.0));
    assert_eq!(eval("cos(0)"), Value::Real(1.0));
    assert_eq!(eval("sqrt(9)"), Value::Real(3.0));
    assert_eq!(eval("lb(8)"), Value::Real(3.0));
    assert_real_close(&eval("log(100)"), 2.0);
    assert_eq!(eval("exp(0)"), Value::Real(1.0));
    assert_eq!(eval("floor(2.7)"), Value::Real(2.0));
    assert_eq!(eval("ceil(2.1)"), Value::Real(3.0));

    assert_eq!(eval("Abs(-7)"), integer(7));
    assert_eq!(eval("abs(-7.5)"), Value::Real(7.5));
}

#[test]
fn result_has_no_runtime_support() {
    assert_eq!(runtime_err("result(1)"), RuntimeError::UnsupportedOperand);
}

#[test]
fn variables_persist_between_lines() {
    assert_eq!(eval("x = 5\nx + 1"), integer(6));
    assert_eq!(eval("x = 2\nx = x + 1\nx * x"), integer(9));

    // Assigning one variable to another copies the value, not the handle.
    assert_eq!(eval("a = 1\nb = a\na = 2\nb"), integer(1));
}

#[test]
fn assignment_evaluates_to_the_assigned_value() {
    assert_eq!(eval("x = 5"), integer(5));
}

#[test]
fn variable_round_trip_through_the_pipeline() {
    let mut tokenizer = Tokenizer::new();

    let assign = parse(&tokenizer.tokenize("x = e").unwrap()).unwrap();
    assert!(evaluate(&assign).unwrap().is_variable());

    let read = parse(&tokenizer.tokenize("x").unwrap()).unwrap();
    let result = evaluate(&read).unwrap();
    assert_eq!(operand_value(&result).unwrap(), Value::Real(std::f64::consts::E));
}

#[test]
fn uninitialized_variables_are_errors() {
    assert_eq!(runtime_err("x + 1"), RuntimeError::VariableNotInitialized);
    assert_eq!(runtime_err("+x"), RuntimeError::VariableNotInitialized);
}

#[test]
fn assignment_requires_a_variable_target() {
    assert_eq!(runtime_err("5 = 4"), RuntimeError::AssignmentToNonVariable);
    assert_eq!(runtime_err("pi = 3"), RuntimeError::AssignmentToNonVariable);
}

#[test]
fn boolean_operators_cover_the_truth_table() {
    assert_eq!(eval("true and (false or not false)"), Value::Bool(true));
    assert_eq!(eval("true and false"), Value::Bool(false));
    assert_eq!(eval("true xor true"), Value::Bool(false));
    assert_eq!(eval("true xor false"), Value::Bool(true));
    assert_eq!(eval("true nand true"), Value::Bool(false));
    assert_eq!(eval("false nor false"), Value::Bool(true));
    assert_eq!(eval("true xnor true"), Value::Bool(true));
    assert_eq!(eval("not false"), Value::Bool(true));
}

#[test]
fn boolean_operators_reject_non_booleans() {
    assert_eq!(runtime_err("1 and true"), RuntimeError::UnsupportedOperand);
    assert_eq!(runtime_err("true or 0"), RuntimeError::UnsupportedOperand);
    assert_eq!(runtime_err("not 1"), RuntimeError::UnsupportedOperand);
    assert_eq!(runtime_err("true + 1"), RuntimeError::UnsupportedOperand);
}

#[test]
fn relational_operators_compare_numbers() {
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("3 > 4"), Value::Bool(false));
    assert_eq!(eval("4 >= 4"), Value::Bool(true));
    assert_eq!(eval("1 < 1.5"), Value::Bool(true));
    assert_eq!(runtime_err("true < false"), RuntimeError::UnsupportedOperand);
}

#[test]
fn equality_compares_by_value_across_numeric_branches() {
    assert_eq!(eval("3 == 3.0"), Value::Bool(true));
    assert_eq!(eval("3 != 3.0"), Value::Bool(false));
    assert_eq!(eval("true == true"), Value::Bool(true));

    // A boolean never equals a number, in either direction.
    assert_eq!(eval("true == 1"), Value::Bool(false));
    assert_eq!(eval("1 != true"), Value::Bool(true));
}

#[test]
fn unbalanced_parentheses_are_parse_errors() {
    assert_eq!(parse_err("((1+2)"), ParseError::MissingRightParenthesis);
    assert_eq!(parse_err("1+2)"), ParseError::UnmatchedRightParenthesis);
}

#[test]
fn tokenizer_errors_carry_their_offset() {
    assert_eq!(tokenizer_err("sin 1"),
               TokenizerError::FunctionNotFollowedByParen { offset: 4 });
    assert_eq!(tokenizer_err("!5"), TokenizerError::MisplacedFactorial { offset: 0 });
    assert_eq!(tokenizer_err("2 + $3"), TokenizerError::BadCharacter { offset: 4 });
    assert_eq!(tokenizer_err("3."), TokenizerError::BadCharacter { offset: 2 });
}

#[test]
fn stack_imbalance_is_reported() {
    assert_eq!(runtime_err("1 +"), RuntimeError::InsufficientOperands);
    assert_eq!(runtime_err("max(1)"), RuntimeError::InsufficientOperands);
    assert_eq!(runtime_err("1 2"), RuntimeError::TooManyOperands);
}

#[test]
fn empty_scripts_produce_no_value() {
    assert_eq!(get_result("", false).unwrap(), None);
    assert_eq!(get_result("\n  \n", false).unwrap(), None);
}
