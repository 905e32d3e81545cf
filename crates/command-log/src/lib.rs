//! Flat-file command audit logging.
//!
//! Implements the dispatcher's [`LogSink`](command_dispatch::LogSink)
//! against an append-only text file. No rotation, no persistence beyond
//! the file itself.

mod error;
mod log;

pub use error::LogError;
pub use log::CommandLog;
