//! Wire protocol for the account-linking API.
//!
//! This crate defines what the game server says to the linking API and
//! how it reads the answers:
//!
//! - **Types** ([`PlayerRef`], [`NotificationRequest`],
//!   [`NotificationResponse`]) are the values that cross the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) turns those values into
//!   bytes and back.
//! - **Errors** ([`ProtocolError`]) cover what can go wrong while
//!   encoding or decoding.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about HTTP, scheduling, or players
//! typing commands. It only knows the JSON shape of each request and the
//! two boolean fields the client ever looks at in a response.
//!
//! ```text
//! Client (events, commands) → Protocol (JSON payloads) → Transport (HTTP)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{NotificationRequest, NotificationResponse, PlayerRef};
