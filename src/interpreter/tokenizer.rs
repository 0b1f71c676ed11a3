use std::collections::HashMap;

use logos::{Lexer, Logos};
use num_bigint::BigInt;

use crate::{
    error::TokenizerError,
    interpreter::token::{Token, TokenList, Variable},
};

/// Classifies why a raw lexeme was rejected before reaching the token layer.
///
/// `BadCharacter` is the catch-all for input that starts no token at all;
/// the other kinds mark numeric literals that break off halfway and carry
/// their offset at the end of the broken prefix rather than its start.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// A character that cannot begin any token.
    #[default]
    BadCharacter,
    /// Digits followed by `.` with no fractional digits, such as `42.`.
    DanglingFractionPoint,
    /// A `0b`/`0B` prefix with no binary digits after it.
    EmptyBinaryLiteral,
}

/// Raw lexemes as recognized by the scanner, before any context is applied.
///
/// `Bang`, `Equals`, `Plus` and `Minus` are deliberately neutral: whether
/// they mean factorial, assignment, addition or a sign is decided by the
/// [`Tokenizer`] from the category of the previously emitted token.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexicalErrorKind)]
#[logos(skip r"[ \t\n\x0b\f\r]+")]
enum RawToken {
    /// Binary integer literal tokens, such as `0b1011`.
    #[regex(r"0[bB][01]*", parse_binary)]
    BinaryInteger(BigInt),
    /// Real literal tokens, such as `3.14`. At least one fractional digit is
    /// required; `3.` is a lexical error.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens of any magnitude, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// Identifier tokens; keyword or variable names such as `sin` or `x1`.
    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
}

/// Parses a decimal integer literal from the current token slice.
fn parse_integer(lex: &mut Lexer<RawToken>) -> Result<BigInt, LexicalErrorKind> {
    BigInt::parse_bytes(lex.slice().as_bytes(), 10).ok_or(LexicalErrorKind::BadCharacter)
}

/// Parses a real literal, rejecting a dangling `.` with no digits after it.
fn parse_real(lex: &mut Lexer<RawToken>) -> Result<f64, LexicalErrorKind> {
    let slice = lex.slice();
    if slice.ends_with('.') {
        return Err(LexicalErrorKind::DanglingFractionPoint);
    }
    slice.parse().map_err(|_| LexicalErrorKind::BadCharacter)
}

/// Parses a binary integer literal, MSB first, rejecting a bare `0b` prefix.
fn parse_binary(lex: &mut Lexer<RawToken>) -> Result<BigInt, LexicalErrorKind> {
    let digits = &lex.slice()[2..];
    if digits.is_empty() {
        return Err(LexicalErrorKind::EmptyBinaryLiteral);
    }
    BigInt::parse_bytes(digits.as_bytes(), 2).ok_or(LexicalErrorKind::BadCharacter)
}

/// The category of the most recently emitted token.
///
/// Drives the context-sensitive rules: `+`/`-` become binary only after a
/// completed expression, and `!` is a factorial only there too.
#[derive(Debug, Clone, Copy)]
enum Previous {
    Start,
    Operand,
    RightParenthesis,
    PostfixOperator,
    Function,
    Other,
}

impl Previous {
    fn classify(token: &Token) -> Self {
        if token.is_operand() {
            Self::Operand
        } else if token.is_right_parenthesis() {
            Self::RightParenthesis
        } else if token.is_postfix_operator() {
            Self::PostfixOperator
        } else if token.is_function() {
            Self::Function
        } else {
            Self::Other
        }
    }

    /// Whether the previous token completes an expression, making a
    /// following `+`/`-` binary and a following `!` a factorial.
    const fn ends_expression(self) -> bool {
        matches!(self,
                 Self::Operand | Self::PostfixOperator | Self::RightParenthesis)
    }
}

/// Converts expression text into token sequences.
///
/// The tokenizer owns two dictionaries that outlive any single expression:
///
/// - `keywords`, loaded once at construction, maps every keyword in its
///   lowercase, Capitalized and UPPERCASE spellings to one interned token;
/// - `variables` maps each identifier (case-sensitively) to its shared
///   [`Variable`] handle and grows on demand.
///
/// Because the variable dictionary persists, expressions tokenized by the
/// same instance share variable state: `x = 5` in one call is visible to
/// `x + 1` in the next.
pub struct Tokenizer {
    keywords:  HashMap<String, Token>,
    variables: HashMap<String, Token>,
}

/// Registers one keyword under its three recognized case variants, all
/// mapping to the same interned token.
fn register(keywords: &mut HashMap<String, Token>, spelling: &str, token: Token) {
    let lowercase = spelling.to_ascii_lowercase();
    let uppercase = spelling.to_ascii_uppercase();
    let mut capitalized = lowercase.clone();
    if let Some(first) = capitalized.get_mut(..1) {
        first.make_ascii_uppercase();
    }

    keywords.insert(lowercase, token.clone());
    keywords.insert(capitalized, token.clone());
    keywords.insert(uppercase, token);
}

#[allow(clippy::new_without_default)]
impl Tokenizer {
    /// Creates a tokenizer with a loaded keyword dictionary and no
    /// variables.
    #[must_use]
    pub fn new() -> Self {
        let mut keywords = HashMap::new();

        register(&mut keywords, "abs", Token::Abs);
        register(&mut keywords, "and", Token::And);
        register(&mut keywords, "arccos", Token::Arccos);
        register(&mut keywords, "arcsin", Token::Arcsin);
        register(&mut keywords, "arctan", Token::Arctan);
        register(&mut keywords, "arctan2", Token::Arctan2);
        register(&mut keywords, "ceil", Token::Ceil);
        register(&mut keywords, "cos", Token::Cos);
        register(&mut keywords, "e", Token::Real(std::f64::consts::E));
        register(&mut keywords, "exp", Token::Exp);
        register(&mut keywords, "false", Token::Boolean(false));
        register(&mut keywords, "floor", Token::Floor);
        register(&mut keywords, "lb", Token::Lb);
        register(&mut keywords, "ln", Token::Ln);
        register(&mut keywords, "log", Token::Log);
        register(&mut keywords, "max", Token::Max);
        register(&mut keywords, "min", Token::Min);
        register(&mut keywords, "mod", Token::Modulus);
        register(&mut keywords, "nand", Token::Nand);
        register(&mut keywords, "nor", Token::Nor);
        register(&mut keywords, "not", Token::Not);
        register(&mut keywords, "or", Token::Or);
        register(&mut keywords, "pi", Token::Real(std::f64::consts::PI));
        register(&mut keywords, "pow", Token::Pow);
        register(&mut keywords, "result", Token::Result);
        register(&mut keywords, "sin", Token::Sin);
        register(&mut keywords, "sqrt", Token::Sqrt);
        register(&mut keywords, "tan", Token::Tan);
        register(&mut keywords, "true", Token::Boolean(true));
        register(&mut keywords, "xnor", Token::Xnor);
        register(&mut keywords, "xor", Token::Xor);

        Self { keywords,
               variables: HashMap::new(), }
    }

    /// Tokenizes one expression.
    ///
    /// New identifiers are registered in the variable dictionary as a side
    /// effect, and stay registered even if a later character fails to scan.
    ///
    /// # Errors
    /// Returns a [`TokenizerError`] for characters that start no token,
    /// broken numeric literals, a function name not followed by `(`, or a
    /// `!` with no completed expression before it.
    ///
    /// # Example
    /// ```
    /// use expreval::Tokenizer;
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// let tokens = tokenizer.tokenize("pi * r ** 2").unwrap();
    /// assert_eq!(tokens.len(), 5);
    /// ```
    pub fn tokenize(&mut self, expression: &str) -> Result<TokenList, TokenizerError> {
        let mut tokens = TokenList::new();
        let mut previous = Previous::Start;
        let mut lexer = RawToken::lexer(expression).spanned().peekable();

        while let Some((raw, span)) = lexer.next() {
            let raw = match raw {
                Ok(raw) => raw,
                Err(kind) => {
                    let offset = match kind {
                        LexicalErrorKind::BadCharacter => span.start,
                        LexicalErrorKind::DanglingFractionPoint
                        | LexicalErrorKind::EmptyBinaryLiteral => span.end,
                    };
                    return Err(TokenizerError::BadCharacter { offset });
                },
            };

            let token = match raw {
                RawToken::Integer(value) | RawToken::BinaryInteger(value) => Token::Integer(value),
                RawToken::Real(value) => Token::Real(value),
                RawToken::Identifier(name) => {
                    if let Some(keyword) = self.keywords.get(&name) {
                        let keyword = keyword.clone();
                        if keyword.is_function() {
                            match lexer.peek() {
                                Some((Ok(RawToken::LParen), _)) => {},
                                Some((_, next_span)) => {
                                    return Err(TokenizerError::FunctionNotFollowedByParen {
                                        offset: next_span.start,
                                    });
                                },
                                None => {
                                    return Err(TokenizerError::FunctionNotFollowedByParen {
                                        offset: expression.len(),
                                    });
                                },
                            }
                        }
                        keyword
                    } else {
                        // The registry key is taken from the handle itself,
                        // so the two can never disagree on the spelling.
                        match self.variables.get(&name) {
                            Some(variable) => variable.clone(),
                            None => {
                                let variable = Variable::new(&name);
                                self.variables.insert(variable.name().to_string(),
                                                      Token::Variable(variable.clone()));
                                Token::Variable(variable)
                            },
                        }
                    }
                },
                RawToken::Bang => {
                    if previous.ends_expression() {
                        Token::Factorial
                    } else {
                        return Err(TokenizerError::MisplacedFactorial { offset: span.start });
                    }
                },
                RawToken::Equals => Token::Assignment,
                RawToken::Plus => {
                    if previous.ends_expression() {
                        Token::Addition
                    } else {
                        Token::Identity
                    }
                },
                RawToken::Minus => {
                    if previous.ends_expression() {
                        Token::Subtraction
                    } else {
                        Token::Negation
                    }
                },
                RawToken::StarStar => Token::Power,
                RawToken::Star => Token::Multiplication,
                RawToken::Slash => Token::Division,
                RawToken::Percent => Token::Modulus,
                RawToken::LParen => Token::LeftParenthesis,
                RawToken::RParen => Token::RightParenthesis,
                RawToken::Comma => Token::ArgumentSeparator,
                RawToken::Less => Token::Less,
                RawToken::LessEqual => Token::LessEqual,
                RawToken::Greater => Token::Greater,
                RawToken::GreaterEqual => Token::GreaterEqual,
                RawToken::EqualEqual => Token::Equality,
                RawToken::BangEqual => Token::Inequality,
            };

            previous = Previous::classify(&token);
            tokens.push(token);
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Tokenizer::new().tokenize(source).expect("tokenizer failed")
    }

    fn integer(value: i64) -> Token {
        Token::Integer(BigInt::from(value))
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(lex("42"), vec![integer(42)]);
        assert_eq!(lex("3.14"), vec![Token::Real(3.14)]);
        assert_eq!(lex("0b1011"), vec![integer(11)]);
        assert_eq!(lex("0B101"), vec![integer(5)]);
    }

    #[test]
    fn huge_integer_literal() {
        let tokens = lex("123456789012345678901234567890");
        let expected = "123456789012345678901234567890".parse::<BigInt>().unwrap();
        assert_eq!(tokens, vec![Token::Integer(expected)]);
    }

    #[test]
    fn broken_literals_are_bad_characters() {
        assert_eq!(Tokenizer::new().tokenize("3."),
                   Err(TokenizerError::BadCharacter { offset: 2 }));
        assert_eq!(Tokenizer::new().tokenize("0b"),
                   Err(TokenizerError::BadCharacter { offset: 2 }));
        assert_eq!(Tokenizer::new().tokenize("@"),
                   Err(TokenizerError::BadCharacter { offset: 0 }));
    }

    #[test]
    fn plus_and_minus_depend_on_context() {
        assert_eq!(lex("1 + 2"), vec![integer(1), Token::Addition, integer(2)]);
        assert_eq!(lex("-2"), vec![Token::Negation, integer(2)]);
        assert_eq!(lex("+2"), vec![Token::Identity, integer(2)]);
        assert_eq!(lex("1 - -2"),
                   vec![integer(1), Token::Subtraction, Token::Negation, integer(2)]);
        assert_eq!(lex("(1) + 2"),
                   vec![Token::LeftParenthesis,
                        integer(1),
                        Token::RightParenthesis,
                        Token::Addition,
                        integer(2)]);
        assert_eq!(lex("3! - 1"),
                   vec![integer(3), Token::Factorial, Token::Subtraction, integer(1)]);
    }

    #[test]
    fn factorial_requires_a_preceding_expression() {
        assert_eq!(lex("3!"), vec![integer(3), Token::Factorial]);
        assert_eq!(Tokenizer::new().tokenize("!5"),
                   Err(TokenizerError::MisplacedFactorial { offset: 0 }));
        assert_eq!(Tokenizer::new().tokenize("1 + !5"),
                   Err(TokenizerError::MisplacedFactorial { offset: 4 }));
    }

    #[test]
    fn two_character_operators_win_over_one() {
        assert_eq!(lex("1 <= 2"), vec![integer(1), Token::LessEqual, integer(2)]);
        assert_eq!(lex("1 < = 2"),
                   vec![integer(1), Token::Less, Token::Assignment, integer(2)]);
        assert_eq!(lex("2 ** 3"), vec![integer(2), Token::Power, integer(3)]);
        assert_eq!(lex("1 != 2"), vec![integer(1), Token::Inequality, integer(2)]);
        assert_eq!(lex("1 == 2"), vec![integer(1), Token::Equality, integer(2)]);
    }

    #[test]
    fn keywords_in_three_case_variants() {
        for spelling in ["pi", "Pi", "PI"] {
            assert_eq!(lex(spelling), vec![Token::Real(std::f64::consts::PI)]);
        }
        for spelling in ["true", "True", "TRUE"] {
            assert_eq!(lex(spelling), vec![Token::Boolean(true)]);
        }
        assert_eq!(lex("7 mod 3"), vec![integer(7), Token::Modulus, integer(3)]);
        // Any other mixed-case spelling is a variable, not the keyword.
        assert!(lex("pI")[0].is_variable());
    }

    #[test]
    fn functions_must_be_called() {
        assert_eq!(lex("sin(0)"),
                   vec![Token::Sin, Token::LeftParenthesis, integer(0), Token::RightParenthesis]);
        assert_eq!(lex("sin  (0)")[0], Token::Sin);
        assert_eq!(Tokenizer::new().tokenize("sin 1"),
                   Err(TokenizerError::FunctionNotFollowedByParen { offset: 4 }));
        assert_eq!(Tokenizer::new().tokenize("sin"),
                   Err(TokenizerError::FunctionNotFollowedByParen { offset: 3 }));
    }

    #[test]
    fn variables_share_one_handle() {
        let mut tokenizer = Tokenizer::new();
        let first = tokenizer.tokenize("x").unwrap();
        let second = tokenizer.tokenize("x + x").unwrap();

        // Variable equality is handle identity, so this only passes if all
        // three `x` tokens alias the same slot.
        assert_eq!(first[0], second[0]);
        assert_eq!(second[0], second[2]);
        assert_eq!(first[0].as_variable().expect("expected a variable").name(), "x");

        // A different spelling gets a different handle.
        let other = tokenizer.tokenize("X").unwrap();
        assert_ne!(first[0], other[0]);
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(lex(" \t 1\n+\t2 "), lex("1+2"));
        assert_eq!(lex(""), Vec::new());
        assert_eq!(lex("   "), Vec::new());
    }
}
