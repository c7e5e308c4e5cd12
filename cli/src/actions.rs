//! Action table: maps each `--action` value to the function that runs it.
//!
//! Every handler shares the [`Handler`] signature, so adding an action means
//! writing one function and registering it in [`ActionTable::new`].

use crate::commands::node;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::rpc::RpcClient;
use clap::ValueEnum;
use futures_util::future::BoxFuture;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    Health,
    Node,
    Validators,
    Peers,
    Block,
    Sync,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Health => "health",
            Action::Node => "node",
            Action::Validators => "validators",
            Action::Peers => "peers",
            Action::Block => "block",
            Action::Sync => "sync",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Handler = for<'a> fn(
    &'a RpcClient,
    OutputFormat,
    &'a mut (dyn Write + Send),
) -> BoxFuture<'a, Result<()>>;

fn health<'a>(
    client: &'a RpcClient,
    format: OutputFormat,
    out: &'a mut (dyn Write + Send),
) -> BoxFuture<'a, Result<()>> {
    Box::pin(node::print_node_info(client, format, out))
}

pub struct ActionTable {
    handlers: HashMap<Action, Handler>,
}

impl ActionTable {
    pub fn new() -> Self {
        let mut handlers: HashMap<Action, Handler> = HashMap::new();
        handlers.insert(Action::Health, health);
        Self { handlers }
    }

    pub fn handler(&self, action: Action) -> Result<Handler> {
        self.handlers
            .get(&action)
            .copied()
            .ok_or(CliError::UnsupportedAction(action))
    }

    pub fn is_registered(&self, action: Action) -> bool {
        self.handlers.contains_key(&action)
    }

    pub async fn dispatch(
        &self,
        action: Action,
        client: &RpcClient,
        format: OutputFormat,
        out: &mut (dyn Write + Send),
    ) -> Result<()> {
        let handler = self.handler(action)?;
        debug!("Running action '{}' against {}", action, client.url());
        handler(client, format, out).await
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_health_is_registered() {
        let table = ActionTable::new();
        for action in Action::value_variants() {
            assert_eq!(table.is_registered(*action), *action == Action::Health);
        }
    }

    #[test]
    fn test_display_matches_cli_name() {
        for action in Action::value_variants() {
            let name = action.to_possible_value().unwrap();
            assert_eq!(name.get_name(), action.as_str());
        }
    }

    #[tokio::test]
    async fn test_unregistered_action_fails_before_any_request() {
        // Nothing listens here; the table must reject the action before dialing
        let client = RpcClient::new("http://127.0.0.1:9", None).unwrap();
        let table = ActionTable::new();
        let mut out = Vec::new();

        for action in [Action::Node, Action::Validators, Action::Peers, Action::Block, Action::Sync] {
            let err = table
                .dispatch(action, &client, OutputFormat::Text, &mut out)
                .await
                .unwrap_err();
            assert!(matches!(err, CliError::UnsupportedAction(a) if a == action));
        }
        assert!(out.is_empty());
    }
}
