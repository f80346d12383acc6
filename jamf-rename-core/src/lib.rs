//! jamf-rename core library: domain types, the API seam, config, errors.
//!
//! - [`types`]: device records and the sync request
//! - [`api`]: [`MobileDeviceApi`], the four remote operations
//! - [`config`]: [`JamfConfig`]
//! - [`error`]: [`RemoteError`], [`ConfigError`]

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use api::MobileDeviceApi;
pub use config::JamfConfig;
pub use error::{ConfigError, RemoteError};
pub use types::{
    Device, DeviceId, ExtensionAttribute, SerialNumber, SyncRequest, SHORTNAME_ATTRIBUTE_ID,
    SHORTNAME_ATTRIBUTE_NAME,
};
