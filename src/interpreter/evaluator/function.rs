/// One-argument built-ins: the real-valued table, branch-preserving `abs`,
/// and the rejected `result`.
pub mod one_arg;

/// Two-argument built-ins: `arctan2`, `max`, `min`, `pow`.
pub mod two_arg;
