//! Table-driven command matching and dispatch for chat bots.
//!
//! Commands are registered once at startup as an immutable table of
//! triggers (exact strings or `*` glob patterns) with handlers behind
//! them. Dispatch is a single pass over the table: the unique matching
//! literal fires first, then every matching wildcard, in registration
//! order. Privileged commands are gated through a [`PrivilegeResolver`]
//! and audited through a [`LogSink`].

mod dispatcher;
mod error;
mod pattern;
mod registry;
mod types;

pub use dispatcher::{DispatchConfig, DispatchOutcome, Dispatcher};
pub use error::DispatchError;
pub use pattern::WildcardPattern;
pub use registry::CommandRegistry;
pub use types::*;
