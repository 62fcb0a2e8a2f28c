/// Errors that can occur in the transport layer.
///
/// None of these ever reach a player. The client logs them and treats
/// the call as having no response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The configured API URL couldn't be parsed.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request couldn't be sent or no response arrived
    /// (connection refused, DNS failure, TLS error, timeout).
    #[error("request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A response arrived but its body couldn't be read.
    #[error("reading response body failed: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}
