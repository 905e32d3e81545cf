//! Help command - lists available commands.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, CommandInfo, Invocation};

/// Renders the command listing from rows captured at table-build time.
///
/// Free-text patterns are left off the listing; the rows here are the
/// literal commands only.
pub struct HelpHandler {
    rows: Vec<CommandInfo>,
}

impl HelpHandler {
    pub fn new(rows: Vec<CommandInfo>) -> Self {
        Self { rows }
    }

    fn render(&self) -> String {
        let mut response = String::from("\nAvailable Commands\n-------------------\n");
        for row in self.rows.iter().filter(|r| !r.requires_privilege) {
            response.push_str(&format!("{} - {}\n", row.trigger, row.description));
        }

        response.push_str("\nADMIN Commands\n-------------------\n");
        for row in self.rows.iter().filter(|r| r.requires_privilege) {
            response.push_str(&format!("{} - {}\n", row.trigger, row.description));
        }

        response
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply(&self.render()).await
    }
}
