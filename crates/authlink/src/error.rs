//! Unified error type for the authlink workspace.

use authlink_protocol::ProtocolError;
use authlink_transport::TransportError;

use crate::settings::SettingsError;

/// Top-level error that wraps all crate-specific errors.
///
/// The client never returns errors to its callers, so through [`Bridge`]
/// only [`AuthlinkError::Settings`] occurs, at startup. The other variants
/// are for hosts that call the layers directly, such as posting through an
/// `HttpTransport` or decoding a body with `JsonCodec`. The `#[from]`
/// conversions let `?` lift any sub-crate error into it.
///
/// [`Bridge`]: crate::Bridge
#[derive(Debug, thiserror::Error)]
pub enum AuthlinkError {
    /// Reading or parsing the settings file failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// An HTTP-level error.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Encoding or decoding a payload failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_error() {
        let err = SettingsError::Io {
            path: "config.yml".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let authlink_err: AuthlinkError = err.into();
        assert!(matches!(authlink_err, AuthlinkError::Settings(_)));
        assert!(authlink_err.to_string().contains("config.yml"));
    }

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        let authlink_err: AuthlinkError = err.into();
        assert!(matches!(authlink_err, AuthlinkError::Transport(_)));
        assert!(authlink_err.to_string().contains("nope"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = serde_json_error();
        let authlink_err: AuthlinkError = ProtocolError::Decode(err).into();
        assert!(matches!(authlink_err, AuthlinkError::Protocol(_)));
    }

    fn serde_json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }
}
