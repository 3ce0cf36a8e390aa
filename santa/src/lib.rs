//! Secret-gift assignment tool.
//!
//! This crate draws a gift exchange: every participant is assigned exactly one
//! other participant to gift, subject to exclusion constraints (forbidden
//! pairs, group exclusivity, self-assignment policy). The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure matching logic (constraint evaluation, feasibility
//!   pre-check, backtracking search). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting collaborators (config loading, notification
//!   and report writers, scaffolding). Isolated to enable tempdir tests.
//!
//! Orchestration modules ([`draw`], [`check`]) coordinate core logic with I/O
//! to implement CLI commands.

pub mod check;
pub mod core;
pub mod draw;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod roster;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
