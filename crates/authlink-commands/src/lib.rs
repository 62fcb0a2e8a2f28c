//! Command routing for authlink.
//!
//! Three commands, one router, no state:
//!
//! - [`Command`]: the command names this crate understands
//! - [`Invoker`]: who typed the command (a player, the console, nobody)
//! - [`CommandRouter`]: answers locally or hands off to the client
//! - [`CommandOutcome`]: tells the host whether to try its other handlers

mod command;
mod router;

pub use command::Command;
pub use router::{CommandOutcome, CommandRouter, Invoker};
