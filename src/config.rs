//! Client configuration and credentials
//!
//! Credentials are either passed explicitly or read once from the
//! `~/.cass-keys` JSON file:
//!
//! ```json
//! { "dlb_api_key": "...", "dlb_url": "https://example.dronelogbook.com" }
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default DroneLogBook REST API
pub const DEFAULT_API_URL: &str = "https://api.dronelogbook.com";

/// Default endpoint for original flight log downloads
pub const DEFAULT_LOG_URL: &str = "https://ou.dronelogbook.com/webservices/getOriginalLogData.php";

/// Default USGS elevation point query service
pub const DEFAULT_ELEVATION_URL: &str = "https://nationalmap.gov";

/// Default upper bound on pages fetched by one listing call
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Name of the credential file in the user's home directory
pub const CREDENTIALS_FILE: &str = ".cass-keys";

// ============================================================================
// Credentials
// ============================================================================

/// API key and customer DLB URL
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Secret API key, sent as the `ApiKey` header
    pub api_key: String,
    /// Customer DroneLogBook URL, sent as the `DlbUrl` header
    pub dlb_url: String,
}

#[derive(Deserialize)]
struct CredentialsFile {
    dlb_api_key: Option<String>,
    dlb_url: Option<String>,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(api_key: impl Into<String>, dlb_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            dlb_url: dlb_url.into(),
        }
    }

    /// Location of the credential file (`~/.cass-keys`)
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .ok_or_else(|| Error::config("Cannot locate home directory for credential file"))?;
        Ok(PathBuf::from(home).join(CREDENTIALS_FILE))
    }

    /// Read credentials from the default credential file
    pub fn from_default_file() -> Result<Self> {
        Self::from_file(Self::default_path()?)
    }

    /// Read credentials from a JSON credential file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read credential file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse credentials from the credential file's JSON content
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(Error::config("Credential file must contain a JSON object"));
        }

        let file: CredentialsFile = serde_json::from_value(value)?;
        let api_key = file
            .dlb_api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::missing_field("dlb_api_key"))?;
        let dlb_url = file
            .dlb_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::missing_field("dlb_url"))?;

        Ok(Self { api_key, dlb_url })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("dlb_url", &self.dlb_url)
            .finish()
    }
}

// ============================================================================
// Client configuration
// ============================================================================

/// Endpoints and limits used by the client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the REST API
    pub api_url: String,
    /// URL of the original log download endpoint
    pub log_url: String,
    /// Base URL of the elevation service
    pub elevation_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum pages fetched by one listing call
    pub max_pages: u32,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_url: DEFAULT_LOG_URL.to_string(),
            elevation_url: DEFAULT_ELEVATION_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: format!("dronelogbook-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Check the configured URLs and limits
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("api_url", &self.api_url),
            ("log_url", &self.log_url),
            ("elevation_url", &self.elevation_url),
        ] {
            let parsed = url::Url::parse(value)?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::InvalidConfigValue {
                    field: field.to_string(),
                    message: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
        }

        if self.max_pages == 0 {
            return Err(Error::InvalidConfigValue {
                field: "max_pages".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.timeout.is_zero() {
            return Err(Error::InvalidConfigValue {
                field: "timeout".to_string(),
                message: "must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the REST API base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the log download URL
    pub fn log_url(mut self, url: impl Into<String>) -> Self {
        self.config.log_url = url.into();
        self
    }

    /// Set the elevation service base URL
    pub fn elevation_url(mut self, url: impl Into<String>) -> Self {
        self.config.elevation_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the page cap for listing calls
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
