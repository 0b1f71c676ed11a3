#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning an expression.
pub enum TokenizerError {
    /// A character that cannot begin any token, including a numeric literal
    /// broken off halfway (`3.` or `0b` with no digits after the prefix).
    BadCharacter {
        /// Byte offset of the offending position in the expression.
        offset: usize,
    },
    /// A function name that is not followed by an opening parenthesis.
    FunctionNotFollowedByParen {
        /// Byte offset of the first character after the function name that
        /// is not `(`, or the end of the expression.
        offset: usize,
    },
    /// A `!` in a position where no completed expression precedes it.
    MisplacedFactorial {
        /// Byte offset of the `!`.
        offset: usize,
    },
}

impl std::fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadCharacter { offset } => {
                write!(f, "Error at position {offset}: Bad character in expression")
            },
            Self::FunctionNotFollowedByParen { offset } => {
                write!(f, "Error at position {offset}: Function not followed by (")
            },
            Self::MisplacedFactorial { offset } => {
                write!(f, "Error at position {offset}: Factorial must follow Expression")
            },
        }
    }
}

impl std::error::Error for TokenizerError {}
