//! The command router.
//!
//! Routing is purely by name. The router keeps no per-player state, so
//! two `verify` commands in a row are two independent calls.

use std::sync::Arc;

use authlink_client::{Actor, MessageSink, NotificationClient, Reply, TaskScheduler};
use authlink_transport::HttpTransport;

use crate::Command;

/// Whoever issued a command.
#[derive(Clone)]
pub enum Invoker {
    /// A player-equivalent actor. Only these can run commands.
    Player(Arc<dyn Actor>),
    /// Something that can be messaged but has no player identity.
    Console(Arc<dyn MessageSink>),
    /// No messaging identity at all.
    Anonymous,
}

/// Whether the router took care of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Handled here. The host should stop looking.
    Handled,
    /// Not one of ours. The host may try other handlers.
    NotHandled,
}

impl CommandOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Dispatches `discordlink`, `verify`, and `discordstatus`.
///
/// | command | args | effect |
/// |---|---|---|
/// | `discordlink` | ignored | instructions, no network |
/// | `verify` | exactly one | background verify; otherwise usage |
/// | `discordstatus` | ignored | background status lookup |
pub struct CommandRouter<T, S> {
    client: NotificationClient<T, S>,
}

impl<T, S> CommandRouter<T, S>
where
    T: HttpTransport,
    S: TaskScheduler,
{
    pub fn new(client: NotificationClient<T, S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &NotificationClient<T, S> {
        &self.client
    }

    /// Routes one command.
    ///
    /// Non-player invokers are turned away before the name is even
    /// looked at, and that counts as handled. A console is told why.
    pub fn dispatch<A>(&self, invoker: &Invoker, name: &str, args: &[A]) -> CommandOutcome
    where
        A: AsRef<str>,
    {
        let actor = match invoker {
            Invoker::Player(actor) => actor,
            Invoker::Console(sink) => {
                sink.send_reply(Reply::PlayersOnly);
                return CommandOutcome::Handled;
            }
            Invoker::Anonymous => return CommandOutcome::Handled,
        };

        let Some(command) = Command::parse(name) else {
            return CommandOutcome::NotHandled;
        };

        tracing::debug!(%command, args = args.len(), "routing command");

        match command {
            Command::DiscordLink => actor.send_reply(Reply::LinkInstructions),
            Command::Verify => match args {
                [code] => self.client.verify_player(Arc::clone(actor), code.as_ref()),
                _ => actor.send_reply(Reply::VerifyUsage),
            },
            Command::DiscordStatus => self.client.get_player_status(Arc::clone(actor)),
        }

        CommandOutcome::Handled
    }
}
