//! Codec trait and the JSON implementation.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The client never calls `serde_json` directly. It holds something that
//! implements [`Codec`], so the request body format lives in one place.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// `Send + Sync + 'static` because the codec lives inside the client,
/// which is shared with every background task it spawns.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// The client itself only encodes. This is for the receiving side, such
    /// as a stub API server that reads request bodies.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or
    /// don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// The linking API only speaks JSON, so this is the codec the client uses.
/// The output is compact (no whitespace) and fields keep their declaration
/// order.
///
/// ## Example
///
/// ```rust
/// use authlink_protocol::{Codec, JsonCodec, NotificationRequest};
/// use uuid::Uuid;
///
/// let request = NotificationRequest::GetPlayerStatus { id: Uuid::nil() };
/// let bytes = JsonCodec.encode(&request).unwrap();
/// assert_eq!(
///     bytes,
///     br#"{"action":"get_player_status","playerUuid":"00000000-0000-0000-0000-000000000000"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationRequest;
    use uuid::Uuid;

    #[test]
    fn test_encode_is_compact() {
        let request = NotificationRequest::GetPlayerStatus { id: Uuid::nil() };
        let bytes = JsonCodec.encode(&request).unwrap();
        assert!(!bytes.contains(&b' '));
        assert!(!bytes.contains(&b'\n'));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result: Result<NotificationRequest, _> = JsonCodec.decode(b"not json");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }

    #[test]
    fn test_decode_unknown_action_is_decode_error() {
        let body = br#"{"action":"fly_to_moon","playerUuid":"00000000-0000-0000-0000-000000000000"}"#;
        let result: Result<NotificationRequest, _> = JsonCodec.decode(body);
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
