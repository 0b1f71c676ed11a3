use crate::{
    error::ParseError,
    interpreter::token::{Token, TokenList},
};

/// Binding strength of an operator; higher binds tighter.
///
/// Precedence is a property of the token tag alone, so the parser never
/// inspects payloads.
const fn precedence(token: &Token) -> u8 {
    match token {
        Token::Factorial => 15,
        Token::Power => 14,
        Token::Identity | Token::Negation | Token::Not => 13,
        Token::Multiplication | Token::Division | Token::Modulus => 12,
        Token::Addition | Token::Subtraction => 11,
        Token::Less | Token::LessEqual | Token::Greater | Token::GreaterEqual => 9,
        Token::Equality | Token::Inequality => 8,
        Token::And | Token::Nand => 6,
        Token::Xor | Token::Xnor => 5,
        Token::Or | Token::Nor => 4,
        Token::Assignment => 1,
        _ => 0,
    }
}

const fn is_right_associative(token: &Token) -> bool {
    matches!(token, Token::Power | Token::Assignment)
}

/// Translates an infix token sequence to postfix (RPN) form.
///
/// This is Dijkstra's shunting-yard algorithm: operands stream straight to
/// the output, operators wait on a stack until an operator of no greater
/// precedence (or equal precedence, for the right-associative ones) arrives,
/// and parentheses plus argument separators delimit function calls. The
/// output contains only operands, operators and functions; the pseudo-tokens
/// are consumed here.
///
/// The translation is pure: tokens are only inspected through their
/// classification, and the input is left untouched.
///
/// # Errors
/// Returns a [`ParseError`] when a `)` has no matching `(`, or when the
/// sequence ends with a `(` still open.
///
/// # Example
/// ```
/// use expreval::{Tokenizer, parse};
///
/// let mut tokenizer = Tokenizer::new();
/// let infix = tokenizer.tokenize("2 + 3 * 4").unwrap();
/// let postfix = parse(&infix).unwrap();
///
/// // 2 3 4 * +
/// assert_eq!(postfix.len(), 5);
/// assert!(postfix.iter().all(|t| t.is_operand() || t.is_operator()));
/// ```
pub fn parse(infix_tokens: &[Token]) -> Result<TokenList, ParseError> {
    let mut output = TokenList::with_capacity(infix_tokens.len());
    let mut operator_stack: Vec<Token> = Vec::new();

    for token in infix_tokens {
        if token.is_operand() {
            output.push(token.clone());
        } else if token.is_function() {
            operator_stack.push(token.clone());
        } else if token.is_argument_separator() {
            // Flush the current argument; the `(` stays for the `)` to find.
            while matches!(operator_stack.last(), Some(top) if !top.is_left_parenthesis()) {
                if let Some(top) = operator_stack.pop() {
                    output.push(top);
                }
            }
        } else if token.is_left_parenthesis() {
            operator_stack.push(token.clone());
        } else if token.is_right_parenthesis() {
            loop {
                match operator_stack.pop() {
                    Some(top) if top.is_left_parenthesis() => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::UnmatchedRightParenthesis),
                }
            }
            // A function call ends at its closing parenthesis.
            if matches!(operator_stack.last(), Some(top) if top.is_function()) {
                if let Some(function) = operator_stack.pop() {
                    output.push(function);
                }
            }
        } else if token.is_operator() {
            while matches!(operator_stack.last(),
                           Some(top) if top.is_operator()
                                        && (precedence(top) > precedence(token)
                                            || (precedence(top) == precedence(token)
                                                && !is_right_associative(token))))
            {
                if let Some(top) = operator_stack.pop() {
                    output.push(top);
                }
            }
            operator_stack.push(token.clone());
        }
        // Anything else is ignored; no other token kind reaches the parser.
    }

    while let Some(top) = operator_stack.pop() {
        if top.is_left_parenthesis() {
            return Err(ParseError::MissingRightParenthesis);
        }
        output.push(top);
    }

    Ok(output)
}
