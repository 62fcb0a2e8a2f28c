//! Core protocol types for the linking API's wire format.
//!
//! Every request is one JSON object that carries an `action`
//! discriminator. A response is, as far as this workspace is concerned,
//! either missing or a raw string with two interesting boolean fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// PlayerRef
// ---------------------------------------------------------------------------

/// A player's identity as the game server reports it.
///
/// The host runtime owns the player. The client only reads a `PlayerRef`
/// for the duration of one call to build a request from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerRef {
    /// Stable unique id. It survives name changes.
    pub id: Uuid,

    /// Display name at the time of the event.
    pub name: String,
}

impl PlayerRef {
    /// Creates a new player reference.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// `tracing::info!(%player, "...")` prints "Steve (00000000-...)".
impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

// ---------------------------------------------------------------------------
// NotificationRequest
// ---------------------------------------------------------------------------

/// One outbound call to the linking API.
///
/// `#[serde(tag = "action")]` produces internally tagged JSON, and
/// `rename_all = "snake_case"` turns the variant names into the API's
/// action names:
///
/// ```text
/// PlayerJoin      → {"action":"player_join","playerUuid":"…","playerName":"…"}
/// PlayerLeave     → {"action":"player_leave","playerUuid":"…","playerName":"…"}
/// VerifyPlayer    → {"action":"verify_player","playerUuid":"…","playerName":"…",
///                    "data":{"verificationCode":"…"}}
/// GetPlayerStatus → {"action":"get_player_status","playerUuid":"…"}
/// ```
///
/// Fields are written in declaration order, so the payload is
/// byte-for-byte deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotificationRequest {
    /// A player connected to the game server.
    PlayerJoin {
        #[serde(rename = "playerUuid")]
        id: Uuid,
        #[serde(rename = "playerName")]
        name: String,
    },

    /// A player disconnected from the game server.
    PlayerLeave {
        #[serde(rename = "playerUuid")]
        id: Uuid,
        #[serde(rename = "playerName")]
        name: String,
    },

    /// A player typed the code they got from the Discord side.
    /// On the wire the code is nested as `data.verificationCode`.
    VerifyPlayer {
        #[serde(rename = "playerUuid")]
        id: Uuid,
        #[serde(rename = "playerName")]
        name: String,
        #[serde(rename = "data", with = "verification_data")]
        code: String,
    },

    /// Ask whether a player has a linked Discord account.
    GetPlayerStatus {
        #[serde(rename = "playerUuid")]
        id: Uuid,
    },
}

impl NotificationRequest {
    pub fn player_join(player: &PlayerRef) -> Self {
        Self::PlayerJoin {
            id: player.id,
            name: player.name.clone(),
        }
    }

    pub fn player_leave(player: &PlayerRef) -> Self {
        Self::PlayerLeave {
            id: player.id,
            name: player.name.clone(),
        }
    }

    pub fn verify_player(player: &PlayerRef, code: impl Into<String>) -> Self {
        Self::VerifyPlayer {
            id: player.id,
            name: player.name.clone(),
            code: code.into(),
        }
    }

    pub fn get_player_status(player: &PlayerRef) -> Self {
        Self::GetPlayerStatus { id: player.id }
    }

    /// The `action` discriminator this request serializes with.
    pub fn action(&self) -> &'static str {
        match self {
            Self::PlayerJoin { .. } => "player_join",
            Self::PlayerLeave { .. } => "player_leave",
            Self::VerifyPlayer { .. } => "verify_player",
            Self::GetPlayerStatus { .. } => "get_player_status",
        }
    }

    /// The id of the player this request is about.
    pub fn player_id(&self) -> Uuid {
        match self {
            Self::PlayerJoin { id, .. }
            | Self::PlayerLeave { id, .. }
            | Self::VerifyPlayer { id, .. }
            | Self::GetPlayerStatus { id } => *id,
        }
    }
}

/// Maps the flat `code` field to `{"verificationCode": code}`.
mod verification_data {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Data<'a> {
        #[serde(rename = "verificationCode")]
        verification_code: &'a str,
    }

    #[derive(Deserialize)]
    struct OwnedData {
        #[serde(rename = "verificationCode")]
        verification_code: String,
    }

    pub fn serialize<S: Serializer>(code: &str, serializer: S) -> Result<S::Ok, S::Error> {
        Data {
            verification_code: code,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        OwnedData::deserialize(deserializer).map(|data| data.verification_code)
    }
}

// ---------------------------------------------------------------------------
// NotificationResponse
// ---------------------------------------------------------------------------

/// What came back from one call.
///
/// `Absent` covers every way a call can fail: transport errors and any
/// status other than 200. Callers can't tell these apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationResponse {
    /// No usable response.
    #[default]
    Absent,

    /// The raw body of a 200 response, verbatim.
    Body(String),
}

impl NotificationResponse {
    /// Set by the API on a successful `verify_player`.
    pub const SUCCESS_FIELD: &'static str = "success";

    /// Set by the API on `get_player_status` for linked players.
    pub const LINKED_DISCORD_FIELD: &'static str = "linkedDiscord";

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The raw body, if there is one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Body(body) => Some(body),
        }
    }

    /// Returns `true` only if the body is a JSON object whose top-level
    /// `field` is the boolean `true`.
    ///
    /// Missing field, `false`, `"true"` (a string), `1`, an array body, or
    /// a body that isn't JSON at all: every one of those is `false`.
    pub fn flag(&self, field: &str) -> bool {
        let Some(body) = self.body() else {
            return false;
        };
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get(field)?.as_bool())
            == Some(true)
    }

    /// `success: true`, the positive answer to `verify_player`.
    pub fn is_success(&self) -> bool {
        self.flag(Self::SUCCESS_FIELD)
    }

    /// `linkedDiscord: true`, the positive answer to `get_player_status`.
    pub fn is_linked_discord(&self) -> bool {
        self.flag(Self::LINKED_DISCORD_FIELD)
    }
}

impl From<Option<String>> for NotificationResponse {
    fn from(body: Option<String>) -> Self {
        match body {
            Some(body) => Self::Body(body),
            None => Self::Absent,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
