//! Command handlers, one module per command group.

pub mod init;
pub mod misc;
pub mod notes;
