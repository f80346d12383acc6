//! Connection settings for a Jamf Pro server.
//!
//! The binary collects these from flags and environment variables; library
//! code only ever sees the assembled [`JamfConfig`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_USER: &str = "INSERT YOUR USERNAME";
pub const DEFAULT_API_PASSWORD: &str = "INSERT YOUR PASSWORD";
pub const DEFAULT_SERVER_BASE_URL: &str = "https://your-jamf-server.com:8443";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to talk to one Jamf server.
#[derive(Clone)]
pub struct JamfConfig {
    base_url: Url,
    pub username: String,
    pub password: String,
    /// PEM file whose certificates are the only trusted roots. `None` uses the
    /// bundled web PKI roots.
    pub cert_file: Option<PathBuf>,
    pub timeout: Duration,
}

impl JamfConfig {
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::OpaqueUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: parsed,
            username: username.into(),
            password: password.into(),
            cert_file: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_cert_file(mut self, cert_file: Option<PathBuf>) -> Self {
        self.cert_file = cert_file;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded as one path
    /// segment. A trailing slash on the base is ignored.
    pub fn endpoint<I, S>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }
        url
    }
}

impl fmt::Debug for JamfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JamfConfig")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("cert_file", &self.cert_file)
            .field("timeout", &self.timeout)
            .finish()
    }
}
