//! Pure matching logic shared by the draw commands.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures; the only nondeterminism is the caller-supplied `Rng`.

pub mod feasibility;
pub mod matcher;
pub mod rules;
pub mod types;
