//! Transport abstraction layer for authlink.
//!
//! Provides the [`HttpTransport`] trait: one JSON POST in, one status code
//! and body out. The client depends only on this trait, so tests can
//! substitute a capturing double for the real network.
//!
//! # Feature Flags
//!
//! - `reqwest` (default): [`ReqwestTransport`], backed by `reqwest::Client`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "reqwest")]
mod http;

pub use error::TransportError;
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;

use std::future::Future;

/// A single outbound POST.
///
/// Owned so a transport can move it into whatever future it builds
/// without borrowing from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    /// Absolute URL of the endpoint.
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer_token: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Vec<u8>,
}

/// The status code and body of a completed exchange.
///
/// Any status is a completed exchange. A 404 or 500 is still `Ok` at this
/// layer, and deciding what counts as success is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// The only status the linking API uses for success.
    pub const OK: u16 = 200;

    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a 200 reply.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(Self::OK, body)
    }

    /// Returns `true` for exactly 200. Other 2xx codes don't count.
    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}

/// Sends JSON POST requests.
///
/// # Trait bounds
///
/// - `Send + Sync + 'static`: one transport is shared by every background
///   task the client submits, possibly on several threads at once.
/// - The returned future is `Send` so it can run on a multi-threaded
///   scheduler.
pub trait HttpTransport: Send + Sync + 'static {
    /// Performs the POST and waits for the full response.
    ///
    /// # Errors
    /// Returns a [`TransportError`] only when no response was obtained.
    /// An error status code is an `Ok(HttpReply)`.
    fn post(
        &self,
        request: PostRequest,
    ) -> impl Future<Output = Result<HttpReply, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_ok() {
        assert!(HttpReply::ok("{}").is_ok());
        assert!(!HttpReply::new(201, "{}").is_ok());
        assert!(!HttpReply::new(204, "").is_ok());
        assert!(!HttpReply::new(404, "").is_ok());
        assert!(!HttpReply::new(500, "").is_ok());
    }

    #[test]
    fn test_transport_error_messages() {
        let err = TransportError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(err.to_string().contains("nope"));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::Request(Box::new(io));
        assert!(err.to_string().contains("refused"));
    }
}
