//! Discord chat bot built on the command-dispatch core.

pub mod commands;
pub mod config;
pub mod error;
pub mod sinks;
