//! Client configuration: where to send requests and how to authenticate.

use std::fmt;

/// The API endpoint and key a client was built with.
///
/// Resolved once, before the client exists. The fields are private and
/// there are no setters, so a client's config never changes. To point at
/// a different endpoint, build a new client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    api_key: String,
}

impl ClientConfig {
    /// Used when the settings file has no `api-url`.
    pub const DEFAULT_API_URL: &'static str =
        "https://your-vercel-domain.vercel.app/api/minecraft";

    /// Used when the settings file has no `api-key`.
    pub const DEFAULT_API_KEY: &'static str = "changeme";

    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// The single endpoint every request is POSTed to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sent as the bearer token on every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns `true` if the key is still the shipped placeholder.
    pub fn uses_default_key(&self) -> bool {
        self.api_key == Self::DEFAULT_API_KEY
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_URL, Self::DEFAULT_API_KEY)
    }
}

// The key is a credential; keep it out of `{:?}` logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(
            config.api_url(),
            "https://your-vercel-domain.vercel.app/api/minecraft"
        );
        assert_eq!(config.api_key(), "changeme");
        assert!(config.uses_default_key());
    }

    #[test]
    fn test_explicit_config() {
        let config = ClientConfig::new("https://example.test/api", "key");
        assert_eq!(config.api_url(), "https://example.test/api");
        assert_eq!(config.api_key(), "key");
        assert!(!config.uses_default_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", ClientConfig::new("https://example.test", "hunter2"));
        assert!(debug.contains("https://example.test"));
        assert!(!debug.contains("hunter2"));
    }
}
