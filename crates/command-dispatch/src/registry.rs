//! Immutable command registry.

use std::collections::HashSet;

use crate::error::DispatchError;
use crate::pattern::WildcardPattern;
use crate::types::{CommandDefinition, CommandInfo, TriggerKind};

#[derive(Debug)]
pub(crate) enum Matcher {
    /// Case-folded trigger, compared for equality.
    Literal(String),
    Wildcard(WildcardPattern),
}

#[derive(Debug)]
pub(crate) struct RegisteredCommand {
    pub(crate) def: CommandDefinition,
    pub(crate) matcher: Matcher,
}

/// The immutable set of registered commands.
///
/// `register` is the only constructor, so a registry in hand is always
/// ready to dispatch. Registration order is preserved; it drives both the
/// wildcard invocation order and `list_commands`.
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Validate and compile a command table.
    ///
    /// Fails when two literal triggers collide after case folding.
    pub fn register(defs: Vec<CommandDefinition>) -> Result<Self, DispatchError> {
        let mut commands = Vec::with_capacity(defs.len());
        let mut literals: HashSet<String> = HashSet::new();

        for def in defs {
            let matcher = match def.kind {
                TriggerKind::Literal => {
                    let folded = def.trigger.to_lowercase();
                    if !literals.insert(folded.clone()) {
                        return Err(DispatchError::DuplicateTrigger(def.trigger));
                    }
                    Matcher::Literal(folded)
                }
                TriggerKind::Wildcard => {
                    // Triggers are matched against case-folded input, so the
                    // pattern is folded too.
                    Matcher::Wildcard(WildcardPattern::compile(&def.trigger.to_lowercase())?)
                }
            };
            commands.push(RegisteredCommand { def, matcher });
        }

        Ok(Self { commands })
    }

    /// Descriptive metadata for every command, in registration order.
    pub fn list_commands(&self) -> Vec<CommandInfo> {
        self.commands.iter().map(|c| c.def.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommandHandler, Invocation};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoopHandler;

    #[async_trait]
    impl CommandHandler for NoopHandler {
        async fn execute(&self, _inv: &Invocation<'_>) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn noop() -> Arc<dyn CommandHandler> {
        Arc::new(NoopHandler)
    }

    #[test]
    fn register_preserves_order() {
        let registry = CommandRegistry::register(vec![
            CommandDefinition::literal("!!ping", "Pong!", noop()),
            CommandDefinition::wildcard("*bubblegum*", "", noop()),
            CommandDefinition::literal("*!reset", "Restarts the bot", noop()).privileged(),
        ])
        .unwrap();

        let infos = registry.list_commands();
        assert_eq!(infos.len(), 3);
        assert_eq!(infos[0].trigger, "!!ping");
        assert_eq!(infos[1].trigger, "*bubblegum*");
        assert_eq!(infos[2].trigger, "*!reset");
        assert!(infos[2].requires_privilege);
        assert!(!infos[0].requires_privilege);
    }

    #[test]
    fn duplicate_literal_rejected() {
        let err = CommandRegistry::register(vec![
            CommandDefinition::literal("!!ping", "Pong!", noop()),
            CommandDefinition::literal("!!ping", "again", noop()),
        ])
        .unwrap_err();

        assert!(matches!(err, DispatchError::DuplicateTrigger(t) if t == "!!ping"));
    }

    #[test]
    fn duplicate_literal_rejected_case_insensitively() {
        let err = CommandRegistry::register(vec![
            CommandDefinition::literal("!!ping", "Pong!", noop()),
            CommandDefinition::literal("!!PING", "shouty", noop()),
        ])
        .unwrap_err();

        assert!(matches!(err, DispatchError::DuplicateTrigger(t) if t == "!!PING"));
    }

    #[test]
    fn identical_wildcards_are_allowed() {
        // Wildcards are evaluated independently; only literals are unique.
        let registry = CommandRegistry::register(vec![
            CommandDefinition::wildcard("*gum*", "", noop()),
            CommandDefinition::wildcard("*gum*", "", noop()),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = CommandRegistry::register(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_commands().is_empty());
    }
}
