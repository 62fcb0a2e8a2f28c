//! The YAML settings file.
//!
//! ```yaml
//! api-url: "https://your-vercel-domain.vercel.app/api/minecraft"
//! api-key: "changeme"
//! ```
//!
//! Both keys are optional. A missing key falls back to the
//! [`ClientConfig`] default for that key. The file is read once, when the
//! bridge starts. Editing it later has no effect on a running client.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use authlink_client::ClientConfig;
use serde::Deserialize;

/// Written on first start so operators have something to edit.
pub const DEFAULT_SETTINGS_YAML: &str = "\
# Endpoint of the account-linking API.
api-url: \"https://your-vercel-domain.vercel.app/api/minecraft\"
# Shared secret, sent as a bearer token. Change this.
api-key: \"changeme\"
";

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Raw contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(rename = "api-url", default)]
    pub api_url: Option<String>,

    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,
}

impl Settings {
    /// Parses settings from YAML text.
    ///
    /// A document with no keys (empty, or only comments) is valid and
    /// yields all defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes [`DEFAULT_SETTINGS_YAML`] to `path` if nothing is there yet.
    ///
    /// Returns `true` if the file was created. An existing file is never
    /// touched.
    pub fn write_default_if_missing(path: impl AsRef<Path>) -> Result<bool, SettingsError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }

        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_SETTINGS_YAML).map_err(io_err)?;

        tracing::info!(path = %path.display(), "wrote default settings file");
        Ok(true)
    }

    /// Resolves missing keys to their defaults.
    ///
    /// An empty string counts as set and is used as-is.
    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig::new(
            self.api_url
                .unwrap_or_else(|| ClientConfig::DEFAULT_API_URL.to_string()),
            self.api_key
                .unwrap_or_else(|| ClientConfig::DEFAULT_API_KEY.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Settings::from_yaml_str("").unwrap().into_client_config();
        assert_eq!(config, ClientConfig::default());

        let config = Settings::from_yaml_str("# nothing here\n")
            .unwrap()
            .into_client_config();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_document_marker_is_accepted() {
        let settings = Settings::from_yaml_str("---\napi-key: k\n").unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("k"));
        assert_eq!(settings.api_url, None);
    }

    #[test]
    fn test_explicit_values_win() {
        let yaml = "api-url: https://example.test/api\napi-key: s3cret\n";
        let config = Settings::from_yaml_str(yaml).unwrap().into_client_config();
        assert_eq!(config.api_url(), "https://example.test/api");
        assert_eq!(config.api_key(), "s3cret");
    }

    #[test]
    fn test_partial_settings() {
        let config = Settings::from_yaml_str("api-key: only-the-key\n")
            .unwrap()
            .into_client_config();
        assert_eq!(config.api_url(), ClientConfig::DEFAULT_API_URL);
        assert_eq!(config.api_key(), "only-the-key");
    }

    #[test]
    fn test_empty_string_is_kept() {
        let config = Settings::from_yaml_str("api-key: \"\"\n")
            .unwrap()
            .into_client_config();
        assert_eq!(config.api_key(), "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings = Settings::from_yaml_str("api-key: k\ndebug: true\n").unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_default_yaml_matches_defaults() {
        let config = Settings::from_yaml_str(DEFAULT_SETTINGS_YAML)
            .unwrap()
            .into_client_config();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(Settings::from_yaml_str("api-url: [unclosed").is_err());
    }

    #[test]
    fn test_write_default_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DiscordAuth").join("config.yml");

        assert!(Settings::write_default_if_missing(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS_YAML);

        fs::write(&path, "api-key: edited\n").unwrap();
        assert!(!Settings::write_default_if_missing(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "api-key: edited\n");
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "api-url: https://example.test\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.api_url.as_deref(), Some("https://example.test"));
        assert_eq!(settings.api_key, None);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "api-url: [unclosed\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("config.yml"));
    }
}
