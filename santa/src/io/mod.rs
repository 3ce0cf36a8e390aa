//! I/O collaborators for the draw commands.

pub mod config;
pub mod init;
pub mod notify;
pub mod report;
