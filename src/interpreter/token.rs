use std::{cell::RefCell, rc::Rc};

use num_bigint::BigInt;

use crate::interpreter::value::Value;

/// An ordered sequence of tokens, as produced by the tokenizer and consumed
/// by the parser and the evaluator.
pub type TokenList = Vec<Token>;

/// A lexical and semantic unit of an expression.
///
/// Every value flowing through the pipeline is a `Token`: operands carry a
/// payload, operators and functions are identified by their tag alone, and
/// the pseudo-tokens only exist between the tokenizer and the parser. A
/// postfix sequence never contains pseudo-tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An arbitrary-precision signed integer literal, such as `42` or
    /// `0b1011`.
    Integer(BigInt),
    /// A floating-point literal, such as `3.14`. The named constants `pi`
    /// and `e` intern as `Real` tokens.
    Real(f64),
    /// A boolean operand; produced by the `true`/`false` keywords and by
    /// relational operators.
    Boolean(bool),
    /// A named, mutable operand slot shared by every expression tokenized by
    /// the same [`crate::interpreter::tokenizer::Tokenizer`].
    Variable(Variable),

    /// `**`, right-associative.
    Power,
    /// `=`, right-associative.
    Assignment,

    /// `+` between two expressions.
    Addition,
    /// `-` between two expressions.
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `%` or the `mod` keyword.
    Modulus,
    /// `==`
    Equality,
    /// `!=`
    Inequality,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `nand`
    Nand,
    /// `nor`
    Nor,
    /// `xnor`
    Xnor,

    /// Prefix `+`.
    Identity,
    /// Prefix `-`.
    Negation,
    /// The `not` keyword.
    Not,

    /// Postfix `!`.
    Factorial,

    /// `abs(x)`; the only function that preserves the operand branch.
    Abs,
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `arcsin(x)`
    Arcsin,
    /// `arccos(x)`
    Arccos,
    /// `arctan(x)`
    Arctan,
    /// `sqrt(x)`
    Sqrt,
    /// `ln(x)`, the natural logarithm.
    Ln,
    /// `lb(x)`, the base-2 logarithm.
    Lb,
    /// `log(x)`, the base-10 logarithm.
    Log,
    /// `exp(x)`
    Exp,
    /// `floor(x)`
    Floor,
    /// `ceil(x)`
    Ceil,
    /// `result(n)`; recognized lexically, rejected at evaluation unless a
    /// host supplies a history collaborator.
    Result,

    /// `arctan2(y, x)`
    Arctan2,
    /// `max(a, b)`
    Max,
    /// `min(a, b)`
    Min,
    /// `pow(base, exponent)`
    Pow,

    /// `(` — never appears in postfix output.
    LeftParenthesis,
    /// `)` — never appears in postfix output.
    RightParenthesis,
    /// `,` — never appears in postfix output.
    ArgumentSeparator,
}

impl Token {
    /// Returns `true` if the token is an operand (integer, real, boolean or
    /// variable).
    ///
    /// # Example
    /// ```
    /// use expreval::Token;
    ///
    /// assert!(Token::Real(2.5).is_operand());
    /// assert!(!Token::Addition.is_operand());
    /// ```
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self,
                 Self::Integer(..) | Self::Real(..) | Self::Boolean(..) | Self::Variable(..))
    }

    /// Returns `true` if the token is an operator of any arity.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.is_binary_operator() || self.is_unary_operator() || self.is_postfix_operator()
    }

    /// Returns `true` if the token is a binary operator.
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        matches!(self,
                 Self::Power
                 | Self::Assignment
                 | Self::Addition
                 | Self::Subtraction
                 | Self::Multiplication
                 | Self::Division
                 | Self::Modulus
                 | Self::Equality
                 | Self::Inequality
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::And
                 | Self::Or
                 | Self::Xor
                 | Self::Nand
                 | Self::Nor
                 | Self::Xnor)
    }

    /// Returns `true` if the token is a prefix operator.
    #[must_use]
    pub const fn is_unary_operator(&self) -> bool {
        matches!(self, Self::Identity | Self::Negation | Self::Not)
    }

    /// Returns `true` if the token is a postfix operator.
    #[must_use]
    pub const fn is_postfix_operator(&self) -> bool {
        matches!(self, Self::Factorial)
    }

    /// Returns `true` if the token is a function of any arity.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        self.is_one_arg_function() || self.is_two_arg_function()
    }

    /// Returns `true` if the token is a one-argument function.
    #[must_use]
    pub const fn is_one_arg_function(&self) -> bool {
        matches!(self,
                 Self::Abs
                 | Self::Sin
                 | Self::Cos
                 | Self::Tan
                 | Self::Arcsin
                 | Self::Arccos
                 | Self::Arctan
                 | Self::Sqrt
                 | Self::Ln
                 | Self::Lb
                 | Self::Log
                 | Self::Exp
                 | Self::Floor
                 | Self::Ceil
                 | Self::Result)
    }

    /// Returns `true` if the token is a two-argument function.
    #[must_use]
    pub const fn is_two_arg_function(&self) -> bool {
        matches!(self, Self::Arctan2 | Self::Max | Self::Min | Self::Pow)
    }

    /// Returns `true` if the token is [`LeftParenthesis`](Self::LeftParenthesis).
    #[must_use]
    pub const fn is_left_parenthesis(&self) -> bool {
        matches!(self, Self::LeftParenthesis)
    }

    /// Returns `true` if the token is [`RightParenthesis`](Self::RightParenthesis).
    #[must_use]
    pub const fn is_right_parenthesis(&self) -> bool {
        matches!(self, Self::RightParenthesis)
    }

    /// Returns `true` if the token is [`ArgumentSeparator`](Self::ArgumentSeparator).
    #[must_use]
    pub const fn is_argument_separator(&self) -> bool {
        matches!(self, Self::ArgumentSeparator)
    }

    /// Returns `true` if the token is [`Variable`](Self::Variable).
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(..))
    }

    /// Returns the integer payload, if the token is an integer operand.
    #[must_use]
    pub const fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the real payload, if the token is a real operand.
    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean payload, if the token is a boolean operand.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the variable handle, if the token is a variable.
    #[must_use]
    pub const fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}

/// A named operand slot.
///
/// The tokenizer registers one `Variable` per distinct identifier and hands
/// out aliases of it, so the handle observed while tokenizing `x = 5` is the
/// very handle later dereferenced by `x`. Cloning shares the underlying
/// cell; two variables compare equal only when they alias the same cell.
///
/// The slot stores a plain [`Value`], never another variable: assignment
/// materializes a fresh operand from the right-hand side.
///
/// # Example
/// ```
/// use expreval::{Value, Variable};
///
/// let x = Variable::new("x");
/// assert!(x.value().is_none());
///
/// x.set(Value::Bool(true));
/// assert_eq!(x.value(), Some(Value::Bool(true)));
/// ```
#[derive(Debug, Clone)]
pub struct Variable {
    name: Rc<str>,
    slot: Rc<RefCell<Option<Value>>>,
}

impl Variable {
    /// Creates a variable with an empty slot.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: Rc::from(name),
               slot: Rc::new(RefCell::new(None)), }
    }

    /// The identifier this variable was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the stored value, or `None` while uninitialized.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        self.slot.borrow().clone()
    }

    /// Stores a value in the slot, replacing any previous one. Every alias
    /// of this variable observes the new value.
    pub fn set(&self, value: Value) {
        *self.slot.borrow_mut() = Some(value);
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}
