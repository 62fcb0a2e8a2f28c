//! [`HttpTransport`] backed by `reqwest`.

use reqwest::header::CONTENT_TYPE;

use crate::{HttpReply, HttpTransport, PostRequest, TransportError};

/// Production transport.
///
/// `reqwest::Client` keeps a connection pool internally and is meant to
/// be built once and reused, so the transport holds one for its whole
/// lifetime. No timeout is configured beyond reqwest's defaults.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (proxy, TLS roots, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: PostRequest) -> Result<HttpReply, TransportError> {
        let url = reqwest::Url::parse(&request.url).map_err(|e| TransportError::InvalidUrl {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        tracing::trace!(%url, bytes = request.body.len(), "sending POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&request.bearer_token)
            .body(request.body)
            .send()
            .await
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(Box::new(e)))?;

        Ok(HttpReply { status, body })
    }
}
