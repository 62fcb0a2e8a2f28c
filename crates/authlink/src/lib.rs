//! # Authlink
//!
//! Connects a game server's player events to a Discord account-linking
//! API.
//!
//! The host runtime constructs one [`Bridge`] per server process and
//! forwards three kinds of callbacks to it: player joined, player quit,
//! and command issued. Everything network-bound runs on the
//! [`TaskScheduler`](authlink_client::TaskScheduler) the host provides.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use authlink::prelude::*;
//!
//! # fn main() -> Result<(), AuthlinkError> {
//! let runtime = tokio::runtime::Runtime::new().expect("runtime");
//! authlink::logging::init();
//!
//! let bridge = Bridge::from_settings_file(
//!     "plugins/DiscordAuth/config.yml",
//!     TokioScheduler::new(runtime.handle().clone()),
//! )?;
//!
//! // From the host's event and command callbacks:
//! // bridge.on_player_join(&player);
//! // bridge.on_command(&Invoker::Player(actor), "verify", &["ABC123"]);
//! # Ok(())
//! # }
//! ```

mod bridge;
mod error;
pub mod logging;
pub mod settings;

pub use bridge::Bridge;
pub use error::AuthlinkError;

pub mod prelude {
    pub use authlink_client::{
        Actor, ClientConfig, LinkStatus, MessageSink, NotificationClient, Reply, TaskScheduler,
        TokioScheduler, VerifyOutcome,
    };
    pub use authlink_commands::{Command, CommandOutcome, CommandRouter, Invoker};
    pub use authlink_protocol::{NotificationRequest, NotificationResponse, PlayerRef};
    pub use authlink_transport::{HttpReply, HttpTransport, PostRequest, ReqwestTransport};

    pub use crate::settings::Settings;
    pub use crate::{AuthlinkError, Bridge};
}
