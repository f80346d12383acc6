//! # jamf-rename-client
//!
//! Blocking HTTPS implementation of [`jamf_rename_core::MobileDeviceApi`]
//! over the Jamf Classic API (`/JSSResource`).
//!
//! Reads are JSON, the device update is an XML document, and every request
//! uses HTTP basic auth. When a certificate file is configured its PEM
//! certificates are the only trusted roots.

mod client;
pub mod error;
mod tls;
mod wire;

pub use client::JamfClient;
pub use error::ClientBuildError;
