//! `Bridge`: the one object a host runtime talks to.
//!
//! This ties the layers together. Settings become a client, and the
//! client gets a router in front of it. The host's callbacks map onto
//! these methods one for one:
//!
//! ```text
//! player joined   → on_player_join
//! player quit     → on_player_quit
//! command issued  → on_command
//! ```

use std::path::Path;

use authlink_client::{ClientConfig, NotificationClient, TaskScheduler};
use authlink_commands::{CommandOutcome, CommandRouter, Invoker};
use authlink_protocol::PlayerRef;
use authlink_transport::{HttpTransport, ReqwestTransport};

use crate::settings::Settings;
use crate::AuthlinkError;

/// Host integration for the notification client and command router.
///
/// Build one per server process. The host owns it and drops it (or
/// calls [`disable`](Self::disable)) on shutdown.
pub struct Bridge<T, S> {
    router: CommandRouter<T, S>,
}

impl<T, S> Bridge<T, S>
where
    T: HttpTransport,
    S: TaskScheduler,
{
    /// Wires a client and router from an already-resolved config.
    pub fn enable(config: ClientConfig, transport: T, scheduler: S) -> Self {
        if config.uses_default_key() {
            tracing::warn!("api-key is still the shipped placeholder; the API will reject requests");
        }
        tracing::info!(api_url = config.api_url(), "DiscordAuth enabled!");

        let client = NotificationClient::new(config, transport, scheduler);
        Self {
            router: CommandRouter::new(client),
        }
    }

    pub fn client(&self) -> &NotificationClient<T, S> {
        self.router.client()
    }

    /// Player-joined hook. Returns immediately.
    pub fn on_player_join(&self, player: &PlayerRef) {
        self.client().notify_player_join(player);
    }

    /// Player-quit hook. Returns immediately.
    pub fn on_player_quit(&self, player: &PlayerRef) {
        self.client().notify_player_leave(player);
    }

    /// Command hook. [`CommandOutcome::NotHandled`] means "not ours".
    pub fn on_command<A>(&self, invoker: &Invoker, name: &str, args: &[A]) -> CommandOutcome
    where
        A: AsRef<str>,
    {
        self.router.dispatch(invoker, name, args)
    }

    /// Shuts the bridge down.
    ///
    /// Background calls already submitted keep running. They hold their
    /// own handle to the client.
    pub fn disable(self) {
        tracing::info!("DiscordAuth disabled!");
    }
}

impl<S> Bridge<ReqwestTransport, S>
where
    S: TaskScheduler,
{
    /// Production startup: saves the default settings file if none exists,
    /// loads it, and talks to the API over `reqwest`.
    pub fn from_settings_file(path: impl AsRef<Path>, scheduler: S) -> Result<Self, AuthlinkError> {
        let path = path.as_ref();
        Settings::write_default_if_missing(path)?;
        let config = Settings::load(path)?.into_client_config();
        Ok(Self::enable(config, ReqwestTransport::new(), scheduler))
    }
}
