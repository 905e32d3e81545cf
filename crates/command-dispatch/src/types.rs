//! Command definitions, caller context, and collaborator traits.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How a trigger string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Exact (case-folded) match of the whole message.
    Literal,
    /// Glob pattern; `*` matches zero or more characters.
    Wildcard,
}

/// Identity of the sender of an inbound message.
///
/// Opaque to the dispatcher beyond what the sinks and the privilege
/// resolver need to address the caller.
#[derive(Debug, Clone)]
pub struct CallerContext {
    /// Stable user id on the platform.
    pub user_id: String,
    /// Human-readable tag, used in log records.
    pub user_tag: String,
    /// Channel the message arrived in.
    pub channel_id: String,
    /// Guild (server) the message arrived in, if any.
    pub guild_id: Option<String>,
}

/// One entry of the privileged-command audit log.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub caller: String,
    pub command: String,
}

impl LogRecord {
    pub fn new(caller: &CallerContext, command: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            caller: caller.user_tag.clone(),
            command: command.into(),
        }
    }
}

/// Descriptive metadata for one registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub trigger: String,
    pub description: String,
    pub requires_privilege: bool,
}

/// What a handler sees: the normalized message, the caller, and the sinks.
pub struct Invocation<'a> {
    /// The inbound text, already case-folded.
    pub text: &'a str,
    /// Who sent it.
    pub caller: &'a CallerContext,
    pub(crate) replies: &'a dyn ReplySink,
    pub(crate) log: &'a dyn LogSink,
}

impl<'a> Invocation<'a> {
    /// Build an invocation by hand, e.g. to exercise a handler directly
    /// in tests.
    pub fn new(
        text: &'a str,
        caller: &'a CallerContext,
        replies: &'a dyn ReplySink,
        log: &'a dyn LogSink,
    ) -> Self {
        Self {
            text,
            caller,
            replies,
            log,
        }
    }

    /// Send a reply attributed to the triggering caller.
    pub async fn reply(&self, text: &str) -> anyhow::Result<()> {
        self.replies.send(self.caller, text).await
    }

    /// Append a record to the command log.
    pub async fn log(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.log.append(record).await
    }
}

/// A command's behavior.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()>;
}

/// Outbound message sink.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, caller: &CallerContext, text: &str) -> anyhow::Result<()>;
}

/// Append-only log sink.
///
/// Append failures must not abort dispatch; the dispatcher reports them
/// through the reply sink and carries on.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn append(&self, record: &LogRecord) -> anyhow::Result<()>;
}

/// Role lookup for privileged commands.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrivilegeResolver: Send + Sync {
    async fn has_role(&self, caller: &CallerContext, role: &str) -> bool;
}

/// A single command: trigger, privilege flag, description, handler.
#[derive(Clone)]
pub struct CommandDefinition {
    pub trigger: String,
    pub kind: TriggerKind,
    pub requires_privilege: bool,
    pub description: String,
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    /// An exact-match command.
    pub fn literal(
        trigger: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            kind: TriggerKind::Literal,
            requires_privilege: false,
            description: description.into(),
            handler,
        }
    }

    /// A glob-pattern command evaluated against the whole message.
    pub fn wildcard(
        trigger: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            kind: TriggerKind::Wildcard,
            requires_privilege: false,
            description: description.into(),
            handler,
        }
    }

    /// Require the caller to hold the configured admin role.
    pub fn privileged(mut self) -> Self {
        self.requires_privilege = true;
        self
    }

    pub fn info(&self) -> CommandInfo {
        CommandInfo {
            trigger: self.trigger.clone(),
            description: self.description.clone(),
            requires_privilege: self.requires_privilege,
        }
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("trigger", &self.trigger)
            .field("kind", &self.kind)
            .field("requires_privilege", &self.requires_privilege)
            .finish()
    }
}
