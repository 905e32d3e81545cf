//! Dispatch errors.

use thiserror::Error;

/// Errors surfaced by the command registry and dispatcher.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Two literal triggers collide after case folding. Raised at
    /// registration time; startup should abort.
    #[error("duplicate literal trigger '{0}'")]
    DuplicateTrigger(String),

    /// A wildcard trigger could not be compiled.
    #[error("invalid wildcard pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The reply sink failed while the dispatcher itself was sending
    /// (permission-denied and log-failure warnings).
    #[error("reply sink failed: {0}")]
    Reply(#[source] anyhow::Error),

    /// A command handler failed. The dispatcher never swallows these.
    #[error("command '{trigger}' failed: {source}")]
    Handler {
        trigger: String,
        #[source]
        source: anyhow::Error,
    },
}
