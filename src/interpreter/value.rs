use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A value produced while evaluating a postfix sequence.
///
/// This enum models the three operand branches that arithmetic, relational
/// and logical operations act upon. Dereferencing a variable always yields
/// one of these; a variable never stores another variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An unbounded signed integer.
    Integer(BigInt),
    /// A double-precision floating-point number.
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and consumed
    /// by the logical operators and `not`.
    Bool(bool),
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or reports an unsupported operand.
    ///
    /// Accepts `Value::Real` and `Value::Integer`; integers beyond the
    /// double range round towards the nearest representable value, as host
    /// floating point does. Booleans never convert.
    ///
    /// # Example
    /// ```
    /// use expreval::Value;
    ///
    /// let x = Value::Integer(10.into());
    /// assert_eq!(x.as_real().unwrap(), 10.0);
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(i) => i.to_f64().ok_or(RuntimeError::UnsupportedOperand),
            Self::Bool(_) => Err(RuntimeError::UnsupportedOperand),
        }
    }

    /// Converts the value to `bool`, or reports an unsupported operand.
    pub const fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::UnsupportedOperand),
        }
    }

    /// Promotes an integer to a real for mixed arithmetic, or returns both
    /// values unchanged when no promotion applies.
    ///
    /// Only the integer-to-real promotion exists; booleans are returned
    /// as-is and fail later in whatever numeric context tries to use them.
    ///
    /// # Example
    /// ```
    /// use expreval::Value;
    ///
    /// let (l, r) = Value::Integer(2.into()).promote_to_real(&Value::Real(0.5)).unwrap();
    /// assert_eq!(l, Value::Real(2.0));
    /// assert_eq!(r, Value::Real(0.5));
    /// ```
    pub fn promote_to_real(self, other: &Self) -> EvalResult<(Self, Self)> {
        match (&self, other) {
            (Self::Real(_), Self::Integer(_)) => Ok((self, Self::Real(other.as_real()?))),
            (Self::Integer(_), Self::Real(_)) => Ok((Self::Real(self.as_real()?), other.clone())),
            _ => Ok((self, other.clone())),
        }
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Real`](Self::Real).
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Bool`](Self::Bool).
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
