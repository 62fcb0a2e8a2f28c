//! Error types for the protocol layer.
//!
//! Each crate in the workspace defines its own error enum, so a
//! `ProtocolError` always means serialization went wrong, never the
//! network.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a request into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes back into a value).
    ///
    /// Common causes: malformed JSON, a missing `action` tag, or an
    /// action name this crate doesn't know.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
