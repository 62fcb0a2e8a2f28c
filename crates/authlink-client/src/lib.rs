//! Notification and verification client for the account-linking API.
//!
//! This crate turns player events into API calls and API answers into
//! player-facing replies:
//!
//! 1. **Requests**: [`NotificationClient`] builds one
//!    [`NotificationRequest`](authlink_protocol::NotificationRequest) per
//!    event and posts it through an
//!    [`HttpTransport`](authlink_transport::HttpTransport).
//! 2. **Scheduling**: every call runs as a background unit of work on a
//!    [`TaskScheduler`], never on the caller's thread.
//! 3. **Replies**: outcomes come back to the player through the [`Actor`]
//!    seam as one of the fixed [`Reply`] lines.
//!
//! # How it fits in the stack
//!
//! ```text
//! Commands / host events (above)  ← decide WHEN to call the client
//!     ↕
//! Client (this crate)             ← builds, schedules, interprets
//!     ↕
//! Protocol + Transport (below)    ← JSON payloads, HTTP POST
//! ```
//!
//! No error ever leaves this crate. A failed call is logged and then
//! treated like a negative answer.

mod actor;
mod client;
mod config;
mod outcome;
mod reply;
mod scheduler;

pub use actor::{Actor, MessageSink};
pub use client::NotificationClient;
pub use config::ClientConfig;
pub use outcome::{LinkStatus, VerifyOutcome};
pub use reply::Reply;
pub use scheduler::{TaskScheduler, TokioScheduler};
