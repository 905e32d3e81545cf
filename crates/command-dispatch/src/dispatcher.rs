//! Command dispatch over an immutable registry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::registry::{CommandRegistry, Matcher, RegisteredCommand};
use crate::types::{
    CallerContext, CommandInfo, Invocation, LogRecord, LogSink, PrivilegeResolver, ReplySink,
};

/// Dispatcher configuration, passed in at construction time.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Role a caller must hold for `requires_privilege` commands.
    pub admin_role: String,
}

/// Which commands one input fired.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Trigger of the literal command that fired, if any.
    pub literal: Option<String>,
    /// Triggers of every wildcard command that fired, in registration order.
    pub wildcards: Vec<String>,
}

impl DispatchOutcome {
    /// True when at least one command matched (fired or was denied).
    pub fn matched(&self) -> bool {
        self.literal.is_some() || !self.wildcards.is_empty()
    }
}

/// Evaluates inbound messages against the registry and runs matching
/// handlers.
///
/// Dispatch mutates nothing: the registry is immutable and all I/O goes
/// through the sinks, so a `Dispatcher` is safe to share across tasks.
pub struct Dispatcher {
    registry: CommandRegistry,
    config: DispatchConfig,
    replies: Arc<dyn ReplySink>,
    log: Arc<dyn LogSink>,
    privileges: Arc<dyn PrivilegeResolver>,
}

impl Dispatcher {
    pub fn new(
        registry: CommandRegistry,
        config: DispatchConfig,
        replies: Arc<dyn ReplySink>,
        log: Arc<dyn LogSink>,
        privileges: Arc<dyn PrivilegeResolver>,
    ) -> Self {
        Self {
            registry,
            config,
            replies,
            log,
            privileges,
        }
    }

    /// Descriptive metadata for every registered command.
    pub fn list_commands(&self) -> Vec<CommandInfo> {
        self.registry.list_commands()
    }

    /// Evaluate one inbound message.
    ///
    /// The literal pass fires at most one handler (literal triggers are
    /// unique). Every matching wildcard then fires in registration order,
    /// regardless of the literal outcome. Unmatched input is a silent
    /// no-op. Handler errors are not caught here; the embedder decides.
    pub async fn dispatch(
        &self,
        raw_text: &str,
        caller: &CallerContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        let text = raw_text.to_lowercase();
        let mut outcome = DispatchOutcome::default();

        for command in self.registry.commands() {
            let Matcher::Literal(folded) = &command.matcher else {
                continue;
            };
            if *folded == text {
                self.invoke(command, &text, caller).await?;
                outcome.literal = Some(command.def.trigger.clone());
                break;
            }
        }

        for command in self.registry.commands() {
            let Matcher::Wildcard(pattern) = &command.matcher else {
                continue;
            };
            if pattern.matches(&text) {
                self.invoke(command, &text, caller).await?;
                outcome.wildcards.push(command.def.trigger.clone());
            }
        }

        if !outcome.matched() {
            debug!(text = %text, "no command matched");
        }
        Ok(outcome)
    }

    /// Run one matched command through the privilege gate.
    async fn invoke(
        &self,
        command: &RegisteredCommand,
        text: &str,
        caller: &CallerContext,
    ) -> Result<(), DispatchError> {
        let trigger = command.def.trigger.as_str();

        if command.def.requires_privilege {
            // The audit record is written before the role check, so denied
            // attempts show up in the log too.
            let record = LogRecord::new(caller, trigger);
            if let Err(e) = self.log.append(&record).await {
                warn!(command = trigger, error = %e, "command log append failed");
                self.replies
                    .send(caller, &format!("WARNING!!! Log file write failed.\n{}", e))
                    .await
                    .map_err(DispatchError::Reply)?;
            }

            if !self
                .privileges
                .has_role(caller, &self.config.admin_role)
                .await
            {
                debug!(command = trigger, caller = %caller.user_tag, "privilege denied");
                let denied = format!(
                    "You don't have permission to use that command. You must have the role of: `{}`",
                    self.config.admin_role
                );
                self.replies
                    .send(caller, &denied)
                    .await
                    .map_err(DispatchError::Reply)?;
                return Ok(());
            }
        }

        debug!(command = trigger, caller = %caller.user_tag, "invoking handler");
        let inv = Invocation {
            text,
            caller,
            replies: self.replies.as_ref(),
            log: self.log.as_ref(),
        };
        command
            .def
            .handler
            .execute(&inv)
            .await
            .map_err(|source| DispatchError::Handler {
                trigger: trigger.to_string(),
                source,
            })
    }
}
