//! Server connection flags, each with a `JAMF_*` environment fallback.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use jamf_rename_core::config::{
    JamfConfig, DEFAULT_API_PASSWORD, DEFAULT_API_USER, DEFAULT_SERVER_BASE_URL,
};

/// Where and as whom to connect. The API user needs READ and UPDATE on
/// mobile devices plus the DeviceName command.
#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Jamf Pro base URL, e.g. https://jamf.example.com:8443
    #[arg(long, env = "JAMF_SERVER_BASE_URL", default_value = DEFAULT_SERVER_BASE_URL)]
    pub server_url: String,

    /// API account name.
    #[arg(long, env = "JAMF_API_USER", default_value = DEFAULT_API_USER)]
    pub api_user: String,

    /// API account password.
    #[arg(
        long,
        env = "JAMF_API_PASSWORD",
        default_value = DEFAULT_API_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub api_password: String,

    /// PEM file with the server certificate; its certificates become the only trusted roots.
    #[arg(long, env = "JAMF_SERVER_CERT_FILE", value_name = "PEM")]
    pub cert_file: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout", env = "JAMF_TIMEOUT_SECS", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ServerArgs {
    pub fn into_config(self) -> Result<JamfConfig> {
        let config = JamfConfig::new(&self.server_url, self.api_user, self.api_password)
            .context("invalid server settings")?;
        Ok(config
            .with_cert_file(self.cert_file)
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}
