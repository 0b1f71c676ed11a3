/// Dispatch from a binary operator token to its family handler, plus
/// assignment.
pub mod core;

/// `+`, `-`, `*`, `/` and `%` over integers and reals.
pub mod scalar;

/// Equality across all operand branches and relational comparison over
/// numbers.
pub mod comparison;

/// `and`, `or`, `xor`, `nand`, `nor`, `xnor` over booleans.
pub mod logic;

/// `**` with an integer fast path and a real fallback.
pub mod power;
