//! Stable exit codes for santa CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config/roster, too few participants, or other errors.
pub const INVALID: i32 = 1;
/// The feasibility pre-check proved no valid assignment exists.
pub const INFEASIBLE: i32 = 2;
/// The full search completed without finding a valid assignment.
pub const EXHAUSTED: i32 = 3;
