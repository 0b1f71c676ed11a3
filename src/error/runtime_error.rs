#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operation required more operands than the stack held.
    InsufficientOperands,
    /// More than one operand remained after the sequence was exhausted.
    TooManyOperands,
    /// An operand had a type the operation does not accept.
    UnsupportedOperand,
    /// A variable was dereferenced before anything was assigned to it.
    VariableNotInitialized,
    /// The left-hand side of `=` was not a variable.
    AssignmentToNonVariable,
    /// Integer division or modulus by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands => write!(f, "Error: insufficient operands"),
            Self::TooManyOperands => write!(f, "Error: too many operands"),
            Self::UnsupportedOperand => write!(f, "Error: unsupported operand"),
            Self::VariableNotInitialized => write!(f, "Error: variable not initialized"),
            Self::AssignmentToNonVariable => write!(f, "Error: assignment to a non-variable"),
            Self::DivisionByZero => write!(f, "Error: division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
